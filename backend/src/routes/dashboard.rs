use serde::{Deserialize, Serialize};

use crate::api::PostoId;

// =========================================================
// Dashboard types
// =========================================================

/// Active facet selections for the dashboard.
///
/// Each facet is either `None` ("no filter") or one categorical value
/// observed in the collection. An empty string from the UI selects are
/// normalized to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardFilter {
    pub kind: Option<String>,
    pub locality: Option<String>,
}

impl DashboardFilter {
    /// Build a filter, treating empty strings as "no filter".
    pub fn new(kind: Option<String>, locality: Option<String>) -> Self {
        Self {
            kind: kind.filter(|s| !s.is_empty()),
            locality: locality.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.locality.is_none()
    }
}

/// One table row of the dashboard: the record plus its derived capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostoRow {
    pub id: PostoId,
    pub name: String,
    pub kind: String,
    pub locality: String,
    pub attendants: i64,
    pub attendances: i64,
    pub avg_per_attendant: f64,
    /// Derived: round(avg_per_attendant * attendants). Never stored.
    pub daily_capacity: i64,
    pub handling_minutes: f64,
    pub icm_percent: f64,
    pub idleness_percent: f64,
}

/// Scalar KPI cards of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardKpis {
    pub total_attendances: i64,
    pub posto_count: usize,
    pub total_attendants: i64,
    /// Mean TMA over the filtered set, rounded to the nearest minute.
    pub avg_handling_minutes: i64,
    pub avg_idleness_percent: i64,
    /// Name of the posto with the highest ICM, `"none"` when the filtered
    /// set is empty. Ties go to the first occurrence in input order.
    pub most_efficient_posto: String,
}

/// Entry of the top-N ranking by attendance volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPostoEntry {
    pub id: PostoId,
    pub name: String,
    pub attendances: i64,
}

/// Facet option lists for the filter selects, extracted from the
/// unfiltered collection in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub kinds: Vec<String>,
    pub localities: Vec<String>,
}

/// One numeric series of a category chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub name: String,
    pub values: Vec<f64>,
}

/// Category-axis chart: posto names paired with one or more series,
/// all in filtered-set order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<SeriesData>,
}

/// One slice of the top-N pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: i64,
}

/// Pie chart of the top-N ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartData {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// Prepared series data for every chart of the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub attendances: ChartData,
    pub efficiency: ChartData,
    pub top3: PieChartData,
    pub attendants: ChartData,
    pub handling_time: ChartData,
    pub daily_capacity: ChartData,
    pub avg_per_attendant: ChartData,
    pub capacity_comparison: ChartData,
}

/// Complete dashboard view model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    /// Filtered collection with derived capacity, order preserved.
    pub postos: Vec<PostoRow>,
    pub kpis: DashboardKpis,
    pub top3: Vec<TopPostoEntry>,
    /// Rows of the requested page. Empty for an out-of-range page.
    pub page_items: Vec<PostoRow>,
    pub page: usize,
    pub total_pages: usize,
    pub facets: FacetOptions,
    pub charts: DashboardCharts,
}

/// Route function name constant for the dashboard
pub const GET_DASHBOARD_DATA: &str = "get_dashboard_data";
