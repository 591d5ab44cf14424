use super::CliError;
use super::helpers::{emit_json, read_request, write_output};
use serde::Serialize;
use so3_core::domain::BandLimits;
use so3_core::sampling::{GridShape, SamplingGrid, SamplingScheme};
use so3_core::storage::{HarmonicIndex, StorageMethod, StorageOrder, StoragePacking};
use std::path::PathBuf;
use tracing::info;

#[derive(clap::Args)]
pub(super) struct BandLimitArgs {
    /// Harmonic band-limit L
    #[arg(long = "band-limit", short = 'L')]
    harmonic: usize,

    /// Orientational band-limit N (1 <= N <= L)
    #[arg(long = "orientational-band-limit", short = 'N')]
    orientational: usize,
}

impl BandLimitArgs {
    fn limits(&self) -> Result<BandLimits, CliError> {
        Ok(BandLimits::new(self.harmonic, self.orientational)?)
    }
}

#[derive(clap::Args)]
pub(super) struct GridArgs {
    #[command(flatten)]
    limits: BandLimitArgs,

    /// Sampling scheme: mw or mwss
    #[arg(long, default_value = "mw")]
    sampling: String,
}

#[derive(clap::Args)]
pub(super) struct SizeArgs {
    #[command(flatten)]
    limits: BandLimitArgs,

    /// Order of the n blocks: 0first or negfirst
    #[arg(long, default_value = "0first")]
    order: String,

    /// Block packing: padded or compact
    #[arg(long, default_value = "padded")]
    storage: String,

    /// Store only n >= 0 for a real function
    #[arg(long)]
    reality: bool,
}

#[derive(clap::Args)]
pub(super) struct InverseArgs {
    /// Transform request JSON
    #[arg(long)]
    request: PathBuf,

    /// Response JSON path; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct GridReport {
    sampling: &'static str,
    #[serde(flatten)]
    shape: GridShape,
    total: usize,
}

#[derive(Debug, Serialize)]
struct SizeReport {
    layout: String,
    reality: bool,
    size: usize,
}

pub(super) fn run_grid_command(args: GridArgs) -> Result<i32, CliError> {
    let limits = args.limits.limits()?;
    let scheme: SamplingScheme = args.sampling.parse()?;
    let shape = SamplingGrid::new(scheme, limits).shape();
    emit_json(&GridReport {
        sampling: scheme.as_str(),
        shape,
        total: shape.total(),
    })?;
    Ok(0)
}

pub(super) fn run_size_command(args: SizeArgs) -> Result<i32, CliError> {
    let limits = args.limits.limits()?;
    let order: StorageOrder = args.order.parse()?;
    let packing: StoragePacking = args.storage.parse()?;
    let method = StorageMethod::new(order, packing);
    let index = HarmonicIndex::new(limits, method, args.reality);
    emit_json(&SizeReport {
        layout: method.to_string(),
        reality: args.reality,
        size: index.size(),
    })?;
    Ok(0)
}

pub(super) fn run_inverse_command(args: InverseArgs) -> Result<i32, CliError> {
    let request = read_request(&args.request)?;
    let parameters = request.parameters()?;
    info!(%parameters, "running inverse transform");

    let response = request.execute()?;
    write_output(args.output.as_deref(), &response)?;
    Ok(0)
}
