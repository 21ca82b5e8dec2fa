use serde::{Deserialize, Serialize};

// the process always listens here
pub const LISTEN_PORT: u16 = 7070;

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// LookupMode decides how the catalog reports a book id it does not hold.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum LookupMode {
    // a miss returns a zero-valued book and no error
    Lenient,
    // a miss returns a not-found error
    Strict,
}

// Configuration abstracts config options for the rpc server. It is built in code only.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub lookup_mode: LookupMode,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            lookup_mode: LookupMode::Lenient,
        }
    }

    pub fn with_lookup_mode(mut self, lookup_mode: LookupMode) -> Self {
        self.lookup_mode = lookup_mode;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
