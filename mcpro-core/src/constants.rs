//! Storage keys. These match the keys existing installs already use.

pub const SALES_KEY: &str = "mc_ventas";
pub const EXPENSES_KEY: &str = "mc_gastos";
pub const INVENTORY_KEY: &str = "mc_insumos";
pub const TASKS_KEY: &str = "mc_tareas";
pub const SHIPMENTS_KEY: &str = "mc_envios";
pub const CLIENTS_KEY: &str = "mc_clientes";
pub const DARK_MODE_KEY: &str = "mc_dark_mode";
pub const NOTES_KEY: &str = "mc_notas";
pub const SETTINGS_KEY: &str = "mc_settings";

/// Markup applied by the pricing calculator when none is given (1.0 = 100%).
pub const DEFAULT_MARGIN: f64 = 1.0;
