use crate::cli::emit;
use crate::engine::{rate_from_slider_position, slider_position_from_rate};
use crate::errors::{AppError, AppResult};
use crate::report::OutputFormat;
use clap::Args;
use serde_json::json;

/// Convert between simulator positions and congestion rates
#[derive(Args, Debug)]
pub struct ScaleCommand {
    /// Congestion rate in sat/vB
    #[arg(long, required_unless_present = "position", conflicts_with = "position")]
    pub rate: Option<f64>,

    /// Slider position (0-100)
    #[arg(long)]
    pub position: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,
}

impl ScaleCommand {
    pub fn run(&self) -> AppResult<()> {
        let (position, rate) = self.convert()?;

        match self.format {
            OutputFormat::Json => {
                let value = json!({ "position": position, "rateSatPerVb": rate });
                emit(&format!("{}\n", serde_json::to_string_pretty(&value)?))?;
            }
            OutputFormat::Console => {
                emit(&format!("Position {:>3} <-> {} sat/vB\n", position, rate))?;
            }
        }
        Ok(())
    }

    /// (slider position, congestion rate) for whichever side was given
    pub fn convert(&self) -> AppResult<(u32, u32)> {
        if let Some(position) = self.position {
            let clamped = if position.is_nan() {
                0
            } else {
                position.clamp(0.0, 100.0).round() as u32
            };
            Ok((clamped, rate_from_slider_position(position)))
        } else if let Some(rate) = self.rate {
            let clamped = if rate.is_nan() {
                1
            } else {
                rate.clamp(1.0, 2000.0).round() as u32
            };
            Ok((slider_position_from_rate(rate), clamped))
        } else {
            Err(AppError::Config(
                "Either --rate or --position is required".to_string(),
            ))
        }
    }
}
