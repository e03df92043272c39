//! Quote formatting and output generation
//!
//! Console output for people, JSON for scripts. Amount display follows the
//! chosen unit; percentages are shown multiplied by 100.

use crate::engine::{slider_position_from_rate, FeeEngine};
use crate::errors::{AppResult, FeeResult};
use crate::feeds::FetchedSnapshot;
use crate::types::{FeeQuote, FeeRateSnapshot, FeeRequest, FeeTier, SnapshotSource};
use crate::utils::currency::{
    fee_in_fiat, format_percentage, format_sats_as_btc, format_usd,
};
use clap::ValueEnum;
use serde::Serialize;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    #[default]
    Console,
    /// JSON format for programmatic use
    Json,
}

/// Unit used for amounts in console output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DisplayUnit {
    #[default]
    Sats,
    Btc,
}

/// A quote together with the inputs that produced it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    pub request: FeeRequest,
    pub congestion_rate: f64,
    pub simulated: bool,
    pub quote: FeeQuote,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_source: Option<SnapshotSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_usd: Option<f64>,
}

impl QuoteReport {
    /// Price `request` and attach the context needed for display
    pub fn build(
        request: FeeRequest,
        snapshot: Option<&FeeRateSnapshot>,
        snapshot_source: Option<SnapshotSource>,
        spot_price_usd: Option<f64>,
    ) -> FeeResult<Self> {
        let quote = FeeEngine::quote(&request, snapshot)?;
        let congestion_rate = FeeEngine::effective_congestion(&request, snapshot)?;

        Ok(Self {
            request,
            congestion_rate,
            simulated: request.congestion_override.is_some(),
            quote,
            snapshot_source,
            fee_usd: spot_price_usd.map(|price| fee_in_fiat(quote.fee_btc, price)),
        })
    }
}

/// Report formatter for quotes, tier tables and snapshots
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format number with thousand separators for console output
    ///
    /// # Examples
    ///
    /// ```
    /// # use tiered_fee_calculator::report::ReportFormatter;
    /// assert_eq!(ReportFormatter::format_number(1234), "1,234");
    /// assert_eq!(ReportFormatter::format_number(100000000), "100,000,000");
    /// assert_eq!(ReportFormatter::format_number(999), "999");
    /// ```
    pub fn format_number(n: u64) -> String {
        let s = n.to_string();
        let mut result = String::with_capacity(s.len() + s.len() / 3);

        for (i, c) in s.chars().enumerate() {
            if i > 0 && (s.len() - i) % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }

        result
    }

    /// Format a satoshi amount in the chosen unit
    pub fn format_amount(sats: u64, unit: DisplayUnit) -> String {
        match unit {
            DisplayUnit::Sats => format!("{} sats", Self::format_number(sats)),
            DisplayUnit::Btc => format_sats_as_btc(sats),
        }
    }

    /// Format a congestion rate, dropping the fraction when it is whole
    pub fn format_rate(rate: f64) -> String {
        if rate.fract() == 0.0 {
            format!("{} sat/vB", rate as u64)
        } else {
            format!("{:.2} sat/vB", rate)
        }
    }

    pub fn format_quote(
        report: &QuoteReport,
        format: OutputFormat,
        unit: DisplayUnit,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
            OutputFormat::Console => {
                let quote = &report.quote;
                let mut out = String::new();

                out.push_str(&format!(
                    "{} fee for {}\n",
                    report.request.tier,
                    Self::format_amount(report.request.amount_sats, unit)
                ));

                let context = if report.simulated {
                    "simulated".to_string()
                } else {
                    report
                        .snapshot_source
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "snapshot".to_string())
                };
                out.push_str(&format!(
                    "  Congestion:       {} ({})\n",
                    Self::format_rate(report.congestion_rate),
                    context
                ));
                out.push_str(&format!(
                    "  Fee:              {}\n",
                    Self::format_amount(quote.fee_sats, unit)
                ));
                if let Some(usd) = report.fee_usd {
                    out.push_str(&format!("  Fee (USD):        {}\n", format_usd(usd)));
                }
                out.push_str(&format!(
                    "  Transaction size: {} vB\n",
                    quote.transaction_size_vbytes
                ));
                out.push_str(&format!(
                    "  Fee percentage:   {}\n",
                    format_percentage(quote.fee_percentage)
                ));
                out.push_str(&format!(
                    "  Base multiplier:  {:.2}\n",
                    quote.base_multiplier
                ));
                out.push_str(&format!(
                    "  Network cost:     {}\n",
                    Self::format_amount(quote.network_cost_sats, unit)
                ));

                Ok(out)
            }
        }
    }

    /// Side-by-side quotes for every tier
    pub fn format_tier_table(
        amount_sats: u64,
        congestion_rate: f64,
        quotes: &[(FeeTier, FeeQuote)],
        format: OutputFormat,
        unit: DisplayUnit,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = quotes
                    .iter()
                    .map(|(tier, quote)| serde_json::json!({ "tier": tier, "quote": quote }))
                    .collect();
                let value = serde_json::json!({
                    "amountSats": amount_sats,
                    "congestionRate": congestion_rate,
                    "tiers": rows,
                });
                Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
            }
            OutputFormat::Console => {
                let mut out = format!(
                    "Fees for {} at {}\n",
                    Self::format_amount(amount_sats, unit),
                    Self::format_rate(congestion_rate)
                );
                out.push_str(&format!(
                    "{:<10} {:>32} {:>8} {:>10} {:>6} {:>32}\n",
                    "Tier", "Fee", "Size", "Percent", "Mult", "Network cost"
                ));
                for (tier, quote) in quotes {
                    out.push_str(&format!(
                        "{:<10} {:>32} {:>8} {:>10} {:>6.2} {:>32}\n",
                        tier.display_name(),
                        Self::format_amount(quote.fee_sats, unit),
                        format!("{} vB", quote.transaction_size_vbytes),
                        format_percentage(quote.fee_percentage),
                        quote.base_multiplier,
                        Self::format_amount(quote.network_cost_sats, unit),
                    ));
                }
                Ok(out)
            }
        }
    }

    pub fn format_snapshot(fetched: &FetchedSnapshot, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(fetched)?)),
            OutputFormat::Console => {
                let mut out = format!(
                    "Recommended fee rates ({}, {})\n",
                    fetched.source,
                    fetched.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
                for (name, rate) in fetched.snapshot.fields() {
                    out.push_str(&format!("  {:<12} {}\n", name, Self::format_rate(rate)));
                }
                out.push_str(&format!(
                    "  Simulator position for fastest: {}\n",
                    slider_position_from_rate(fetched.snapshot.fastest)
                ));
                Ok(out)
            }
        }
    }
}
