//! The submit pipeline.

use sw_graph::{EntityError, Rejection, ValidatedAxis, validate};
use sw_store::{GraphId, GraphRecord, GraphStore, MetricRegistry, StoredAxis, StoredItem};

use crate::session::{SubmitRequest, build_config};

/// Validate a raw submission and commit it.
///
/// The store is only touched after field validation, the items gate, and
/// every metric reference have all passed, so any rejection leaves the store
/// fingerprint byte-identical.
pub fn submit_graph(
    request: &SubmitRequest,
    store: &mut GraphStore,
    registry: &dyn MetricRegistry,
) -> Result<GraphId, Rejection> {
    let config = build_config(request);
    let validated = validate(&config, request.prototype).inspect_err(|rejection| {
        tracing::debug!(header = %rejection.header, count = rejection.details.len(), "submission rejected");
    })?;

    let mut items = Vec::with_capacity(config.items.len());
    for item in &config.items {
        let metric = resolve(registry, &item.metric, request.prototype)?;
        items.push(StoredItem {
            metric,
            function: item.function,
            style: item.style,
            side: item.side,
            color: item.color.clone(),
            role: item.role,
        });
    }
    let ymin = resolve_axis(&validated.ymin, registry, request.prototype)?;
    let ymax = resolve_axis(&validated.ymax, registry, request.prototype)?;

    let record = GraphRecord {
        name: validated.name,
        kind: config.kind,
        width: validated.width,
        height: validated.height,
        show_legend: config.show_legend,
        show_work_period: config.show_work_period,
        show_triggers: config.show_triggers,
        show_3d: config.show_3d,
        percent_left: validated.percent_left,
        percent_right: validated.percent_right,
        ymin,
        ymax,
        items,
    };
    let id = store.commit(record);
    tracing::info!(%id, "graph accepted");
    Ok(id)
}

fn resolve(
    registry: &dyn MetricRegistry,
    metric: &str,
    prototype: bool,
) -> Result<sw_store::MetricId, Rejection> {
    registry.resolve_metric(metric).ok_or_else(|| {
        let error = EntityError::UnknownMetric {
            metric: metric.to_string(),
        };
        tracing::debug!(metric, "unresolved metric reference");
        Rejection::from_entity_error(prototype, &error)
    })
}

fn resolve_axis(
    axis: &ValidatedAxis,
    registry: &dyn MetricRegistry,
    prototype: bool,
) -> Result<StoredAxis, Rejection> {
    match axis {
        ValidatedAxis::Calculated => Ok(StoredAxis::Calculated),
        ValidatedAxis::Fixed(value) => Ok(StoredAxis::Fixed { value: *value }),
        ValidatedAxis::Item(metric) => {
            let metric = resolve(registry, metric, prototype)?;
            Ok(StoredAxis::Item { metric })
        }
    }
}
