//! Chart series builders for the dashboard page.
//!
//! Pure reshapes of the filtered collection: every chart pairs the posto
//! names (category axis, filtered-set order) with one or more numeric
//! series in the same order. No aggregation happens here beyond the top-N
//! ranking the pie chart consumes. Titles and series labels are the product
//! strings the renderer shows verbatim.

use crate::api::{ChartData, DashboardCharts, PieChartData, PieSlice, SeriesData, TopPostoEntry};
use crate::models::Posto;
use crate::services::dashboard::daily_capacity;

fn category_axis(postos: &[Posto]) -> Vec<String> {
    postos.iter().map(|p| p.name.clone()).collect()
}

fn series(name: &str, values: Vec<f64>) -> SeriesData {
    SeriesData {
        name: name.to_string(),
        values,
    }
}

fn single_series_chart(title: &str, postos: &[Posto], name: &str, values: Vec<f64>) -> ChartData {
    ChartData {
        title: title.to_string(),
        categories: category_axis(postos),
        series: vec![series(name, values)],
    }
}

/// Attendance volume per posto (bar).
pub fn attendances_chart(postos: &[Posto]) -> ChartData {
    single_series_chart(
        "Atendimentos por Posto",
        postos,
        "Atendimentos",
        postos.iter().map(|p| p.attendances as f64).collect(),
    )
}

/// ICM and idleness per posto on two series (line pair).
pub fn efficiency_chart(postos: &[Posto]) -> ChartData {
    ChartData {
        title: "Eficiência por Posto".to_string(),
        categories: category_axis(postos),
        series: vec![
            series("ICM %", postos.iter().map(|p| p.icm_percent).collect()),
            series(
                "Ociosidade %",
                postos.iter().map(|p| p.idleness_percent).collect(),
            ),
        ],
    }
}

/// Attendance distribution of the top-N ranking (pie).
pub fn top3_chart(top: &[TopPostoEntry]) -> PieChartData {
    PieChartData {
        title: "Top 3 Postos".to_string(),
        slices: top
            .iter()
            .map(|entry| PieSlice {
                name: entry.name.clone(),
                value: entry.attendances,
            })
            .collect(),
    }
}

/// Attendant headcount per posto (bar).
pub fn attendants_chart(postos: &[Posto]) -> ChartData {
    single_series_chart(
        "Quantidade de Atendentes por Posto",
        postos,
        "Atendentes",
        postos.iter().map(|p| p.attendants as f64).collect(),
    )
}

/// Average handling time per posto, in minutes (bar).
pub fn handling_time_chart(postos: &[Posto]) -> ChartData {
    single_series_chart(
        "TMA (Tempo Médio de Atendimento) por Posto",
        postos,
        "TMA",
        postos.iter().map(|p| p.handling_minutes).collect(),
    )
}

/// Derived daily capacity per posto (bar).
pub fn daily_capacity_chart(postos: &[Posto]) -> ChartData {
    single_series_chart(
        "Capacidade Diária Estimada por Posto",
        postos,
        "Capacidade",
        postos.iter().map(|p| daily_capacity(p) as f64).collect(),
    )
}

/// Average attendances per attendant per posto (bar).
pub fn avg_per_attendant_chart(postos: &[Posto]) -> ChartData {
    single_series_chart(
        "Média de Atendimento por Atendente",
        postos,
        "Média por Atendente",
        postos.iter().map(|p| p.avg_per_attendant).collect(),
    )
}

/// Attendance volume against derived daily capacity (bar + line).
pub fn capacity_comparison_chart(postos: &[Posto]) -> ChartData {
    ChartData {
        title: "Comparativo Diário: Atendimentos vs Capacidade".to_string(),
        categories: category_axis(postos),
        series: vec![
            series(
                "Atendimentos",
                postos.iter().map(|p| p.attendances as f64).collect(),
            ),
            series(
                "Capacidade",
                postos.iter().map(|p| daily_capacity(p) as f64).collect(),
            ),
        ],
    }
}

/// Build the full chart set for one dashboard request.
pub fn build_charts(postos: &[Posto], top3: &[TopPostoEntry]) -> DashboardCharts {
    DashboardCharts {
        attendances: attendances_chart(postos),
        efficiency: efficiency_chart(postos),
        top3: top3_chart(top3),
        attendants: attendants_chart(postos),
        handling_time: handling_time_chart(postos),
        daily_capacity: daily_capacity_chart(postos),
        avg_per_attendant: avg_per_attendant_chart(postos),
        capacity_comparison: capacity_comparison_chart(postos),
    }
}
