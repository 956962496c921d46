use std::collections::BTreeSet;

/// Boolean switches understood by the version report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    All,
    Number,
    Revision,
    Time,
    Modified,
    GoVersion,
    Json,
}

impl Flag {
    pub const EVERY: [Flag; 7] = [
        Flag::All,
        Flag::Number,
        Flag::Revision,
        Flag::Time,
        Flag::Modified,
        Flag::GoVersion,
        Flag::Json,
    ];

    /// Long command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Flag::All => "all",
            Flag::Number => "number",
            Flag::Revision => "revision",
            Flag::Time => "time",
            Flag::Modified => "modified",
            Flag::GoVersion => "go-version",
            Flag::Json => "json",
        }
    }

    /// Single-letter alias; `json` has none.
    pub fn short(self) -> Option<char> {
        match self {
            Flag::All => Some('a'),
            Flag::Number => Some('n'),
            Flag::Revision => Some('r'),
            Flag::Time => Some('t'),
            Flag::Modified => Some('m'),
            Flag::GoVersion => Some('g'),
            Flag::Json => None,
        }
    }
}

/// Flags the caller supplied explicitly for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionFlags {
    set: BTreeSet<Flag>,
}

impl SelectionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `flag` as explicitly set.
    pub fn mark(&mut self, flag: Flag) {
        self.set.insert(flag);
    }

    pub fn with(mut self, flag: Flag) -> Self {
        self.mark(flag);
        self
    }

    pub fn is_set(&self, flag: Flag) -> bool {
        self.set.contains(&flag)
    }

    /// True when any flag other than `json` was supplied.
    pub fn any_field(&self) -> bool {
        self.set.iter().any(|f| *f != Flag::Json)
    }

    pub fn json(&self) -> bool {
        self.is_set(Flag::Json)
    }

    /// Resolves which report fields are included.
    ///
    /// With no field flags only the version number is shown; `all` selects
    /// everything regardless of the other flags.
    pub fn fields(&self) -> Fields {
        let all = self.is_set(Flag::All);
        Fields {
            version: !self.any_field() || self.is_set(Flag::Number) || all,
            revision: self.is_set(Flag::Revision) || all,
            time: self.is_set(Flag::Time) || all,
            go_version: self.is_set(Flag::GoVersion) || all,
            modified: self.is_set(Flag::Modified) || all,
        }
    }
}

impl FromIterator<Flag> for SelectionFlags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        Self {
            set: iter.into_iter().collect(),
        }
    }
}

/// Fields included in a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fields {
    pub version: bool,
    pub revision: bool,
    pub time: bool,
    pub go_version: bool,
    pub modified: bool,
}

impl Fields {
    pub const ALL: Fields = Fields {
        version: true,
        revision: true,
        time: true,
        go_version: true,
        modified: true,
    };
}
