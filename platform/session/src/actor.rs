use std::fmt;

/// One of the two independent upstream systems.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Actor {
    /// Front-Office.
    Fo,
    /// Back-Office.
    Bo,
}

impl Actor {
    pub const ALL: [Actor; 2] = [Actor::Fo, Actor::Bo];

    /// Path segment of the actor's namespace on the upstream base URL.
    pub fn path_segment(self) -> &'static str {
        match self {
            Actor::Fo => "fo",
            Actor::Bo => "bo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Actor::Fo => "FO",
            Actor::Bo => "BO",
        }
    }

    /// Browser cookie holding this actor's upstream session token.
    pub fn cookie_name(self) -> &'static str {
        match self {
            Actor::Fo => "cookie-fo",
            Actor::Bo => "cookie-bo",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
