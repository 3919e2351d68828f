/// Comment delimiters used when rendering a stub's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    pub block_open: &'static str,
    pub block_close: &'static str,
    pub line: &'static str,
}

pub const C_STYLE: CommentStyle = CommentStyle { block_open: "/*", block_close: "*/", line: "//" };
pub const PASCAL_STYLE: CommentStyle = CommentStyle { block_open: "{", block_close: "}", line: "//" };
pub const PYTHON_STYLE: CommentStyle = CommentStyle { block_open: "\"\"\"", block_close: "\"\"\"", line: "#" };

pub const DEFAULT_EXTENSION: &str = ".txt";

/// Languages the judge reports, keyed by its numeric language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    AnsiC,
    Java,
    Cpp,
    Pascal,
    Cpp11,
    Python3,
}

impl Language {
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::AnsiC),
            2 => Some(Self::Java),
            3 => Some(Self::Cpp),
            4 => Some(Self::Pascal),
            5 => Some(Self::Cpp11),
            6 => Some(Self::Python3),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::AnsiC => ".c",
            Self::Java => ".java",
            Self::Cpp | Self::Cpp11 => ".cpp",
            Self::Pascal => ".pas",
            Self::Python3 => ".py",
        }
    }

    pub fn comment_style(self) -> CommentStyle {
        match self {
            Self::AnsiC | Self::Java | Self::Cpp | Self::Cpp11 => C_STYLE,
            Self::Pascal => PASCAL_STYLE,
            Self::Python3 => PYTHON_STYLE,
        }
    }
}

pub fn extension_for(code: u64) -> &'static str {
    Language::from_code(code).map_or(DEFAULT_EXTENSION, Language::extension)
}

pub fn comment_style_for(code: u64) -> CommentStyle {
    Language::from_code(code).map_or(C_STYLE, Language::comment_style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_cpp_codes_share_an_extension() {
        assert_eq!(extension_for(3), ".cpp");
        assert_eq!(extension_for(5), ".cpp");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(extension_for(0), ".txt");
        assert_eq!(extension_for(42), ".txt");
        assert_eq!(comment_style_for(42), C_STYLE);
    }

    #[test]
    fn python_uses_hash_comments() {
        assert_eq!(comment_style_for(6).line, "#");
        assert_eq!(comment_style_for(4).block_open, "{");
    }
}
