pub mod detail_table;
pub mod kpi_card;
pub mod line_chart;
pub mod pagination_controls;
pub mod period_tabs;
pub mod radial_gauge;
pub mod sidebar;
