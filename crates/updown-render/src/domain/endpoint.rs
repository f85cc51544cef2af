use std::fmt;

/// The two fixed resources the client knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Up,
    Down,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::Up => "/up",
            Self::Down => "/down",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
