pub type So3Result<T> = Result<T, So3Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum So3ErrorCategory {
    ShapeError,
    RangeError,
    EnumError,
    IndexError,
    NumericalError,
}

impl So3ErrorCategory {
    pub const fn compatibility_placeholder(self) -> CompatibilityExitPlaceholder {
        match self {
            Self::ShapeError => CompatibilityExitPlaceholder {
                exit_code: 2,
                rust_category: "ShapeError",
                legacy_class: "INPUT_FATAL",
            },
            Self::RangeError => CompatibilityExitPlaceholder {
                exit_code: 2,
                rust_category: "RangeError",
                legacy_class: "INPUT_FATAL",
            },
            Self::EnumError => CompatibilityExitPlaceholder {
                exit_code: 2,
                rust_category: "EnumError",
                legacy_class: "INPUT_FATAL",
            },
            Self::IndexError => CompatibilityExitPlaceholder {
                exit_code: 3,
                rust_category: "IndexError",
                legacy_class: "INDEX_FATAL",
            },
            Self::NumericalError => CompatibilityExitPlaceholder {
                exit_code: 4,
                rust_category: "NumericalError",
                legacy_class: "RUN_FATAL",
            },
        }
    }

    pub const fn exit_code(self) -> i32 {
        self.compatibility_placeholder().exit_code
    }

    pub const fn rust_category(self) -> &'static str {
        self.compatibility_placeholder().rust_category
    }

    pub const fn legacy_class(self) -> &'static str {
        self.compatibility_placeholder().legacy_class
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityExitPlaceholder {
    pub exit_code: i32,
    pub rust_category: &'static str,
    pub legacy_class: &'static str,
}

/// Validation and runtime failures of the SO(3) transforms.
///
/// Every input variant names the offending argument so callers can
/// self-diagnose without inspecting the transform internals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum So3Error {
    #[error("invalid number of elements in '{parameter}': expected {expected}, got {actual}")]
    Shape {
        parameter: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("'{parameter}' out of range: {message}")]
    Range {
        parameter: &'static str,
        message: String,
    },
    #[error("invalid {parameter} '{value}'; expected one of {expected}")]
    Enum {
        parameter: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("invalid harmonic index (l={l}, m={m}, n={n}): {reason}")]
    Index {
        l: i32,
        m: i32,
        n: i32,
        reason: &'static str,
    },
    #[error("offset {offset} outside coefficient buffer of length {size}")]
    Offset { offset: usize, size: usize },
    #[error("numerical failure during {stage}: {message}")]
    Numerical {
        stage: &'static str,
        message: String,
    },
}

impl So3Error {
    pub fn shape(parameter: &'static str, expected: usize, actual: usize) -> Self {
        Self::Shape {
            parameter,
            expected,
            actual,
        }
    }

    pub fn range(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::Range {
            parameter,
            message: message.into(),
        }
    }

    pub fn invalid_enum(
        parameter: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::Enum {
            parameter,
            value: value.into(),
            expected,
        }
    }

    pub fn index(l: i32, m: i32, n: i32, reason: &'static str) -> Self {
        Self::Index { l, m, n, reason }
    }

    pub fn numerical(stage: &'static str, message: impl Into<String>) -> Self {
        Self::Numerical {
            stage,
            message: message.into(),
        }
    }

    pub const fn category(&self) -> So3ErrorCategory {
        match self {
            Self::Shape { .. } => So3ErrorCategory::ShapeError,
            Self::Range { .. } => So3ErrorCategory::RangeError,
            Self::Enum { .. } => So3ErrorCategory::EnumError,
            Self::Index { .. } | Self::Offset { .. } => So3ErrorCategory::IndexError,
            Self::Numerical { .. } => So3ErrorCategory::NumericalError,
        }
    }

    /// Stable identifier of the violated constraint, e.g. `INPUT.FLMN_SIZE`.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Shape { parameter, .. } => match *parameter {
                "flmn" => "INPUT.FLMN_SIZE",
                _ => "INPUT.SAMPLE_COUNT",
            },
            Self::Range { parameter, .. } => match *parameter {
                "L" => "INPUT.HARMONIC_BAND_LIMIT",
                "N" => "INPUT.ORIENTATIONAL_BAND_LIMIT",
                "reality" => "INPUT.REALITY",
                _ => "INPUT.RANGE",
            },
            Self::Enum { parameter, .. } => match *parameter {
                "order" => "INPUT.ORDER",
                "storage" => "INPUT.STORAGE",
                "n_mode" => "INPUT.N_MODE",
                "dl_method" => "INPUT.DL_METHOD",
                "sampling" => "INPUT.SAMPLING_SCHEME",
                _ => "INPUT.ENUM",
            },
            Self::Index { .. } | Self::Offset { .. } => "INDEX.HARMONIC",
            Self::Numerical { .. } => "RUN.NUMERICAL",
        }
    }

    pub const fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder(), self)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}
