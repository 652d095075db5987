pub mod kpi_card;
pub mod profit_badge;
pub mod toast;
