use crate::core::calculator::hours::{DecimalNotation, PunchPolicy};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub company_name: String,
    #[serde(default = "default_missing_label")]
    pub missing_label: String,
    #[serde(default = "default_source_pattern")]
    pub source_pattern: String,
    #[serde(default = "default_roster_sheet")]
    pub roster_sheet: String,
    #[serde(default = "default_roster_first_row")]
    pub roster_first_row: u32,
    #[serde(default = "default_punch_sheet")]
    pub punch_sheet: String,
    #[serde(default = "default_punch_group_row")]
    pub punch_group_row: u32,
    #[serde(default = "default_punch_day_row")]
    pub punch_day_row: u32,
    #[serde(default = "default_punch_group_label")]
    pub punch_group_label: String,
    #[serde(default = "default_output_name")]
    pub output_name: String,
    #[serde(default = "default_font_name")]
    pub font_name: String,
    #[serde(default)]
    pub decimal_notation: DecimalNotation,
    #[serde(default)]
    pub punch_policy: PunchPolicy,
}

fn default_missing_label() -> String {
    "数据缺失".to_string()
}
fn default_source_pattern() -> String {
    r"^考勤表-上下班工时统计表(\d{4})年(\d{1,2})月.*\.xlsx$".to_string()
}
fn default_roster_sheet() -> String {
    "考勤统计".to_string()
}
fn default_roster_first_row() -> u32 {
    7
}
fn default_punch_sheet() -> String {
    "打卡时间".to_string()
}
fn default_punch_group_row() -> u32 {
    2
}
fn default_punch_day_row() -> u32 {
    3
}
fn default_punch_group_label() -> String {
    "打卡时间".to_string()
}
fn default_output_name() -> String {
    "{year}年{month}月员工考勤统计表.xlsx".to_string()
}
fn default_font_name() -> String {
    "微软雅黑".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            missing_label: default_missing_label(),
            source_pattern: default_source_pattern(),
            roster_sheet: default_roster_sheet(),
            roster_first_row: default_roster_first_row(),
            punch_sheet: default_punch_sheet(),
            punch_group_row: default_punch_group_row(),
            punch_day_row: default_punch_day_row(),
            punch_group_label: default_punch_group_label(),
            output_name: default_output_name(),
            font_name: default_font_name(),
            decimal_notation: DecimalNotation::default(),
            punch_policy: PunchPolicy::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("punchsheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".punchsheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchsheet.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        file.write_all(yaml.as_bytes())
            .map_err(|e| AppError::ConfigSave(e.to_string()))?;
        Ok(())
    }

    /// Output file name for a month, from the `output_name` template.
    pub fn output_file_name(&self, year: i32, month: u32) -> String {
        self.output_name
            .replace("{year}", &year.to_string())
            .replace("{month}", &month.to_string())
    }
}
