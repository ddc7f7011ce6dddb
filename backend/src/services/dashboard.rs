//! Dashboard metrics engine.
//!
//! Fixed pipeline over an in-memory posto collection:
//!
//! 1. filter by the active facet selections ([`filter_postos`])
//! 2. derive per-record values not present in the raw data
//!    ([`daily_capacity`])
//! 3. aggregate the filtered set into KPIs and rankings ([`compute_kpis`],
//!    [`top_by_attendances`])
//! 4. reshape for presentation: paginated rows, facet option lists, chart
//!    series ([`total_pages`], [`page_items`], [`crate::services::charts`])
//!
//! Every function here is pure and recomputed from scratch per call. The
//! collection arrives already ordered by the store (the dashboard feed is
//! attendance-volume descending); nothing here re-sorts it except the
//! explicit top-N ranking.

use crate::api::{
    DashboardData, DashboardFilter, DashboardKpis, FacetOptions, PostoRow, TopPostoEntry,
};
use crate::models::Posto;
use crate::services::charts::build_charts;

/// Fixed page size of the dashboard table.
pub const PAGE_SIZE: usize = 10;

/// Ranking size consumed by the top-N pie chart.
pub const DEFAULT_TOP_N: usize = 3;

/// Label reported when the filtered set has no records to rank.
pub const NO_POSTO_SENTINEL: &str = "none";

/// Filter stage: keep records matching every non-empty facet exactly.
///
/// Matching is case-sensitive equality; an empty facet places no constraint.
/// Input order is preserved.
pub fn filter_postos(postos: &[Posto], filter: &DashboardFilter) -> Vec<Posto> {
    postos
        .iter()
        .filter(|p| {
            filter.kind.as_ref().map_or(true, |kind| &p.kind == kind)
                && filter
                    .locality
                    .as_ref()
                    .map_or(true, |locality| &p.locality == locality)
        })
        .cloned()
        .collect()
}

/// Distinct facet values from the unfiltered collection, in order of first
/// appearance, so one active filter never narrows the other select's options.
pub fn facet_options(postos: &[Posto]) -> FacetOptions {
    let mut kinds: Vec<String> = Vec::new();
    let mut localities: Vec<String> = Vec::new();
    for posto in postos {
        if !kinds.contains(&posto.kind) {
            kinds.push(posto.kind.clone());
        }
        if !localities.contains(&posto.locality) {
            localities.push(posto.locality.clone());
        }
    }
    FacetOptions { kinds, localities }
}

/// Derivation stage: estimated daily capacity of a posto.
///
/// `round(avg_per_attendant * attendants)`, rounding half up
/// (`f64::round`; all inputs are non-negative). Recomputed on every read,
/// never stored.
pub fn daily_capacity(posto: &Posto) -> i64 {
    (posto.avg_per_attendant * posto.attendants as f64).round() as i64
}

/// A dashboard table row: the record plus its derived capacity.
pub fn posto_row(posto: &Posto) -> PostoRow {
    PostoRow {
        id: posto.id,
        name: posto.name.clone(),
        kind: posto.kind.clone(),
        locality: posto.locality.clone(),
        attendants: posto.attendants,
        attendances: posto.attendances,
        avg_per_attendant: posto.avg_per_attendant,
        daily_capacity: daily_capacity(posto),
        handling_minutes: posto.handling_minutes,
        icm_percent: posto.icm_percent,
        idleness_percent: posto.idleness_percent,
    }
}

/// Aggregation stage: scalar KPIs over the filtered set.
///
/// Sums are 0 and averages are 0 for an empty set; averages round to the
/// nearest integer. The most efficient posto is the maximum `icm_percent`,
/// first occurrence winning ties, with the [`NO_POSTO_SENTINEL`] label when
/// there is nothing to rank.
pub fn compute_kpis(postos: &[Posto]) -> DashboardKpis {
    let total_attendances: i64 = postos.iter().map(|p| p.attendances).sum();
    let total_attendants: i64 = postos.iter().map(|p| p.attendants).sum();

    let avg_handling_minutes = if postos.is_empty() {
        0
    } else {
        let sum: f64 = postos.iter().map(|p| p.handling_minutes).sum();
        (sum / postos.len() as f64).round() as i64
    };

    let avg_idleness_percent = if postos.is_empty() {
        0
    } else {
        let sum: f64 = postos.iter().map(|p| p.idleness_percent).sum();
        (sum / postos.len() as f64).round() as i64
    };

    let mut most_efficient: Option<&Posto> = None;
    for posto in postos {
        if most_efficient.map_or(true, |best| posto.icm_percent > best.icm_percent) {
            most_efficient = Some(posto);
        }
    }

    DashboardKpis {
        total_attendances,
        posto_count: postos.len(),
        total_attendants,
        avg_handling_minutes,
        avg_idleness_percent,
        most_efficient_posto: most_efficient
            .map(|p| p.name.clone())
            .unwrap_or_else(|| NO_POSTO_SENTINEL.to_string()),
    }
}

/// The `n` records with the largest attendance volume, descending.
///
/// The sort is stable, so ties keep their input order. Fewer than `n`
/// records returns all of them.
pub fn top_by_attendances(postos: &[Posto], n: usize) -> Vec<TopPostoEntry> {
    let mut ranked: Vec<&Posto> = postos.iter().collect();
    ranked.sort_by(|a, b| b.attendances.cmp(&a.attendances));
    ranked
        .into_iter()
        .take(n)
        .map(|p| TopPostoEntry {
            id: p.id,
            name: p.name.clone(),
            attendances: p.attendances,
        })
        .collect()
}

/// Number of pages for a filtered count; at least 1 (an empty page is a
/// valid page, not an error).
pub fn total_pages(filtered_count: usize) -> usize {
    filtered_count.div_ceil(PAGE_SIZE).max(1)
}

/// Rows of the requested 1-based page, clamped to the collection bounds.
///
/// A page past the end yields an empty list; resetting or clamping the
/// current page when the filter shrinks the result set is the caller's job.
/// Page 0 is treated as page 1.
pub fn page_items(rows: &[PostoRow], page: usize) -> Vec<PostoRow> {
    let offset = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if offset >= rows.len() {
        return Vec::new();
    }
    let end = (offset + PAGE_SIZE).min(rows.len());
    rows[offset..end].to_vec()
}

/// Compute the complete dashboard view model for one request.
///
/// `postos` is the full collection as served by the store; `page` is the
/// 1-based table page. Facet options come from the unfiltered collection;
/// everything else is computed over the filtered subset.
pub fn compute_dashboard_data(
    postos: &[Posto],
    filter: &DashboardFilter,
    page: usize,
) -> DashboardData {
    let facets = facet_options(postos);
    let filtered = filter_postos(postos, filter);

    let rows: Vec<PostoRow> = filtered.iter().map(posto_row).collect();
    let kpis = compute_kpis(&filtered);
    let top3 = top_by_attendances(&filtered, DEFAULT_TOP_N);
    let charts = build_charts(&filtered, &top3);

    let total_pages = total_pages(rows.len());
    let page_items = page_items(&rows, page);

    DashboardData {
        postos: rows,
        kpis,
        top3,
        page_items,
        page,
        total_pages,
        facets,
        charts,
    }
}
