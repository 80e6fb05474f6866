use std::fmt::Display;
use std::str::FromStr;

const UNIT_STEP: f64 = 1024.0;

/// Unit a file size can be reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeUnit {
    #[default]
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl SizeUnit {
    fn steps(&self) -> i32 {
        match self {
            SizeUnit::Bytes => 0,
            SizeUnit::Kilobytes => 1,
            SizeUnit::Megabytes => 2,
            SizeUnit::Gigabytes => 3,
        }
    }

    /// Convert a raw byte count into this unit
    pub fn scale(&self, bytes: u64) -> f64 {
        bytes as f64 / UNIT_STEP.powi(self.steps())
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            SizeUnit::Bytes => "B",
            SizeUnit::Kilobytes => "KB",
            SizeUnit::Megabytes => "MB",
            SizeUnit::Gigabytes => "GB",
        }
    }

    /// Render a byte count in this unit, e.g. `1.50 KB`
    pub fn format(&self, bytes: u64) -> String {
        match self {
            SizeUnit::Bytes => format!("{bytes} {}", self.suffix()),
            _ => format!("{:.2} {}", self.scale(bytes), self.suffix()),
        }
    }
}

impl FromStr for SizeUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "bytes" => Ok(SizeUnit::Bytes),
            "k" | "kb" => Ok(SizeUnit::Kilobytes),
            "m" | "mb" => Ok(SizeUnit::Megabytes),
            "g" | "gb" => Ok(SizeUnit::Gigabytes),
            other => anyhow::bail!("unknown size unit: {other}"),
        }
    }
}

impl Display for SizeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}
