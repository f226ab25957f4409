use std::{
    collections::HashSet,
    fs::OpenOptions,
    io::{Error, ErrorKind, Result},
};

// the fixed membership tables for mode capability checks,
// each base mode also has a binary (b) and text (t) suffixed form
lazy_static! {
    static ref READABLE_MODES: HashSet<&'static str> = [
        "r", "r+", "w+", "a+", "x+", "c+", "rb", "r+b", "w+b", "a+b", "x+b", "c+b", "rt", "r+t",
        "w+t", "a+t", "x+t", "c+t",
    ]
    .iter()
    .cloned()
    .collect();
    static ref WRITABLE_MODES: HashSet<&'static str> = [
        "r+", "w", "w+", "a", "a+", "x", "x+", "c", "c+", "r+b", "wb", "w+b", "ab", "a+b", "xb",
        "x+b", "cb", "c+b", "r+t", "wt", "w+t", "at", "a+t", "xt", "x+t", "ct", "c+t",
    ]
    .iter()
    .cloned()
    .collect();
}

/// the open-mode string a platform handle reports about itself,
/// e.g. `r`, `w+`, `a+b`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mode(String);

impl Mode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// is this mode a member of the fixed readable set?
    pub fn is_readable(&self) -> bool {
        READABLE_MODES.contains(self.0.as_str())
    }

    /// is this mode a member of the fixed writable set?
    pub fn is_writable(&self) -> bool {
        WRITABLE_MODES.contains(self.0.as_str())
    }

    /// translate this mode into platform open options
    /// unknown mode strings are an InvalidInput error
    pub(crate) fn open_options(&self) -> Result<OpenOptions> {
        // the b / t suffix only selects binary vs text translation,
        // which does not exist at this layer
        let base = match self.0.as_str() {
            s if s.ends_with('b') || s.ends_with('t') => &s[..s.len() - 1],
            s => s,
        };
        let mut options = OpenOptions::new();
        match base {
            "r" => options.read(true),
            "r+" => options.read(true).write(true),
            "w" => options.write(true).create(true).truncate(true),
            "w+" => options.read(true).write(true).create(true).truncate(true),
            "a" => options.append(true).create(true),
            "a+" => options.read(true).append(true).create(true),
            "x" => options.write(true).create_new(true),
            "x+" => options.read(true).write(true).create_new(true),
            "c" => options.write(true).create(true),
            "c+" => options.read(true).write(true).create(true),
            _ => {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("unrecognized open mode '{}'", self.0),
                ));
            }
        };
        Ok(options)
    }
}

impl From<&str> for Mode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Mode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_matrix_matches_the_fixed_sets() {
        let matrix = [
            ("r", true, false),
            ("r+", true, true),
            ("w", false, true),
            ("w+", true, true),
            ("a", false, true),
            ("a+", true, true),
            ("x", false, true),
            ("x+", true, true),
            ("c", false, true),
            ("c+", true, true),
        ];
        for (mode, readable, writable) in matrix.iter() {
            for suffix in ["", "b", "t"].iter() {
                let mode = Mode::from(format!("{}{}", mode, suffix));
                assert_eq!(*readable, mode.is_readable(), "readable: {}", mode);
                assert_eq!(*writable, mode.is_writable(), "writable: {}", mode);
            }
        }
    }

    #[test]
    fn unknown_modes_have_no_capabilities() {
        let mode = Mode::from("q");
        assert!(!mode.is_readable());
        assert!(!mode.is_writable());
        assert_eq!(
            ErrorKind::InvalidInput,
            mode.open_options().unwrap_err().kind()
        );
    }

    #[test]
    fn suffixed_modes_translate_to_open_options() {
        Mode::from("rb").open_options().unwrap();
        Mode::from("w+t").open_options().unwrap();
    }
}
