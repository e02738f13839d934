pub mod kpi_card;
pub mod margin_indicator;
pub mod toast;
