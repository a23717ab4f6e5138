use strum::{Display, EnumString};

/// Assembler/linker conventions to emit for.
///
/// The target only affects code emission: symbol naming, function framing
/// and the trailing directives. Lexing, parsing and code generation are
/// identical on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    Linux,
    Osx,
}

impl Platform {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Unknown target: {s}")),
        }
    }

    /// Platform the compiler itself is running on.
    pub fn host() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Osx
        } else {
            Platform::Linux
        }
    }
}

#[test]
fn test() {
    assert_eq!(Platform::parse("linux"), Ok(Platform::Linux));
    assert_eq!(Platform::parse("OSX"), Ok(Platform::Osx));
    assert!(Platform::parse("hoge").is_err());
    assert_eq!(Platform::Linux.to_string(), "linux");
    assert_eq!(Platform::Osx.to_string(), "osx");
}
