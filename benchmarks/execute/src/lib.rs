use std::{collections::BTreeMap, ffi::OsStr, fs::File, hint::black_box, io::Write, time::Instant};

use clap::ValueEnum;
use eyre::{eyre, Result, WrapErr};
use metrics::{counter, gauge, Gauge};
use metrics_tracing_context::{MetricsLayer, TracingContextLayer};
use metrics_util::{
    debugging::{DebugValue, DebuggingRecorder, Snapshot},
    layers::Layer,
    CompositeKey, MetricKind,
};
use serde_json::json;
use testprog_core::{MatrixSampler, SequenceComputer, Workload};
use tracing::{info_span, Level};
use tracing_forest::{ForestLayer, Printer};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

pub const EXECUTE_TIME_LABEL: &str = "execute_time_ms";
pub const ITERATIONS_LABEL: &str = "iterations";
pub const RUNS_LABEL: &str = "runs";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WorkloadKind {
    /// Two-register additive recurrence
    Sequence,
    /// Strided sum over the zeroed sample grid
    Sampler,
}

impl WorkloadKind {
    pub fn execute(self, arg: Option<&str>, out: &mut impl Write) -> Result<()> {
        match self {
            Self::Sequence => execute_workload(&SequenceComputer, arg, out),
            Self::Sampler => execute_workload(&MatrixSampler, arg, out),
        }
    }
}

/// Runs `workload` once under an `execute` span, recording its iteration count and wall time,
/// and writes the outcome line to `out`.
pub fn execute_workload<W: Workload>(
    workload: &W,
    arg: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let bound = workload.resolve(arg);
    let outcome = info_span!("execute", workload = workload.name()).in_scope(|| {
        counter!(RUNS_LABEL).increment(1);
        counter!(ITERATIONS_LABEL).increment(workload.iterations(bound));
        time(gauge!(EXECUTE_TIME_LABEL), || workload.run(black_box(bound)))
    });
    writeln!(out, "{outcome}")?;
    Ok(())
}

pub fn time<F: FnOnce() -> R, R>(gauge: Gauge, f: F) -> R {
    let start = Instant::now();
    let res = f();
    gauge.set(start.elapsed().as_millis() as f64);
    res
}

/// Run a function with metric collection enabled. The metrics will be written to a file specified
/// by an environment variable which name is `output_path_envar`.
pub fn run_with_metric_collection<R>(
    output_path_envar: impl AsRef<OsStr>,
    f: impl FnOnce() -> Result<R>,
) -> Result<R> {
    let file = std::env::var(output_path_envar)
        .ok()
        .map(|path| File::create(&path).wrap_err_with(|| format!("cannot create {path}")))
        .transpose()?;
    // Set up tracing; the span tree goes to stderr so stdout keeps only outcome lines.
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    let subscriber = Registry::default()
        .with(env_filter)
        .with(ForestLayer::from(Printer::new().writer(std::io::stderr)))
        .with(MetricsLayer::new());
    tracing::subscriber::set_global_default(subscriber)?;

    // Prepare metrics.
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    let recorder = TracingContextLayer::all().layer(recorder);
    metrics::set_global_recorder(recorder)
        .map_err(|_| eyre!("a global metrics recorder is already installed"))?;

    let res = f()?;

    if let Some(file) = file {
        serde_json::to_writer_pretty(&file, &serialize_metric_snapshot(snapshotter.snapshot()))
            .wrap_err("failed to write metrics")?;
    }
    Ok(res)
}

/// Serialize a metric into a JSON object. The object has the following structure:
/// {
///    "metric": <Metric Name>,
///    "labels": [
///       (<key1>, <value1>),
///       (<key2>, <value2>),
///     ],
///    "value": <float value if gauge | integer value if counter | list if histogram>
/// }
fn serialize_metric(ckey: CompositeKey, value: DebugValue) -> serde_json::Value {
    let (_kind, key) = ckey.into_parts();
    let (key_name, labels) = key.into_parts();
    let value = match value {
        DebugValue::Gauge(v) => json!(v.into_inner().to_string()),
        DebugValue::Counter(v) => json!(v.to_string()),
        DebugValue::Histogram(values) => {
            json!(values.into_iter().map(|v| v.into_inner()).collect::<Vec<_>>())
        }
    };
    let labels = labels
        .into_iter()
        .map(|label| {
            let (k, v) = label.into_parts();
            (k.as_ref().to_owned(), v.as_ref().to_owned())
        })
        .collect::<Vec<_>>();

    json!({
        "metric": key_name.as_str(),
        "labels": labels,
        "value": value,
    })
}

/// Serialize a metric snapshot into a JSON object keyed by metric kind (`"counter"`,
/// `"gauge"`, `"histogram"`), each holding a list of metrics as produced by
/// `serialize_metric`.
pub fn serialize_metric_snapshot(snapshot: Snapshot) -> serde_json::Value {
    let mut ret = BTreeMap::<_, Vec<serde_json::Value>>::new();
    for (ckey, _, _, value) in snapshot.into_vec() {
        let kind = match ckey.kind() {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
            MetricKind::Histogram => "histogram",
        };
        ret.entry(kind)
            .or_default()
            .push(serialize_metric(ckey, value));
    }
    json!(ret)
}
