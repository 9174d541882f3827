use core::fmt;
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::cli::output::arguments::Argument;
use crate::utils::constants;

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct CompilerModel {
    pub cpp_compiler: CppCompiler,
    pub driver_path: Option<String>,
    pub cpp_standard: LanguageLevel,
    pub extra_args: Vec<Argument<'static>>,
}

impl CompilerModel {
    pub fn language_level(&self) -> Cow<'static, str> {
        match self.cpp_compiler {
            CppCompiler::CLANG | CppCompiler::GCC => format!("-std=c++{}", self.cpp_standard),
            CppCompiler::MSVC => format!("/std:c++{}", self.cpp_standard),
        }
        .into()
    }

    pub fn language_level_arg(&self) -> Argument<'static> {
        Argument::from(self.language_level())
    }

    /// The driver that will be spawned, the user provided one taking precedence
    /// over the well known name of the compiler
    pub fn driver(&self) -> &str {
        self.driver_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| self.cpp_compiler.get_driver())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize, Default)]
pub enum CppCompiler {
    #[default]
    CLANG,
    MSVC,
    GCC,
}

impl fmt::Display for CppCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for CppCompiler {
    fn as_ref(&self) -> &str {
        match *self {
            CppCompiler::CLANG => "clang",
            CppCompiler::MSVC => "msvc",
            CppCompiler::GCC => "gcc",
        }
    }
}

impl CppCompiler {
    /// Returns an &str representing the compiler driver that will be called
    /// in the command line to compile the scratch translation unit
    pub fn get_driver(&self) -> &'static str {
        match *self {
            CppCompiler::CLANG => "clang++",
            CppCompiler::MSVC => "cl",
            CppCompiler::GCC => "g++",
        }
    }

    /// The flag that stops the driver after generating the object file
    pub fn compile_but_dont_link(&self) -> Argument<'static> {
        Argument::from(match *self {
            CppCompiler::CLANG | CppCompiler::GCC => "-c",
            CppCompiler::MSVC => "/c",
        })
    }

    #[inline(always)]
    pub fn get_obj_file_extension(&self) -> &'static str {
        match *self {
            CppCompiler::CLANG | CppCompiler::GCC => constants::OBJ_FILE_EXT_GNU,
            CppCompiler::MSVC => constants::OBJ_FILE_EXT_MSVC,
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LanguageLevel {
    CPP11,
    CPP14,
    CPP17,
    #[default]
    CPP20,
    CPP23,
    LATEST,
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for LanguageLevel {
    fn as_ref(&self) -> &'static str {
        match *self {
            LanguageLevel::CPP11 => "11",
            LanguageLevel::CPP14 => "14",
            LanguageLevel::CPP17 => "17",
            LanguageLevel::CPP20 => "20",
            LanguageLevel::CPP23 => "23",
            LanguageLevel::LATEST => "latest",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_level_flags() {
        let mut model = CompilerModel {
            cpp_compiler: CppCompiler::GCC,
            cpp_standard: LanguageLevel::CPP11,
            ..Default::default()
        };
        assert_eq!(model.language_level(), "-std=c++11");

        model.cpp_compiler = CppCompiler::MSVC;
        model.cpp_standard = LanguageLevel::LATEST;
        assert_eq!(model.language_level_arg().value(), "/std:c++latest");
    }

    #[test]
    fn test_driver_resolution() {
        let mut model = CompilerModel {
            cpp_compiler: CppCompiler::GCC,
            ..Default::default()
        };
        assert_eq!(model.driver(), "g++");

        model.driver_path = Some(String::new());
        assert_eq!(model.driver(), "g++");

        model.driver_path = Some("/opt/gcc-13/bin/g++".into());
        assert_eq!(model.driver(), "/opt/gcc-13/bin/g++");
    }
}
