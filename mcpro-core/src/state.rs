//! Application state: every record set behind its own accessor, loaded once
//! at startup and saved on every change.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DARK_MODE_KEY, DEFAULT_MARGIN, NOTES_KEY, SETTINGS_KEY};
use crate::error::{McProError, McProResult};
use crate::records::{Client, Expense, InventoryItem, Sale, Shipment, Task};
use crate::store::{PersistedStore, RecordSet};
use crate::timer;

fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

/// User preferences kept alongside the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Default markup for quotes (1.0 = 100%).
    #[serde(default = "default_margin")]
    pub margin: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            margin: DEFAULT_MARGIN,
        }
    }
}

pub struct AppState {
    store: PersistedStore,
    sales: RecordSet<Sale>,
    expenses: RecordSet<Expense>,
    inventory: RecordSet<InventoryItem>,
    tasks: RecordSet<Task>,
    shipments: RecordSet<Shipment>,
    clients: RecordSet<Client>,
}

impl AppState {
    pub fn load(store: PersistedStore) -> Self {
        AppState {
            sales: RecordSet::load(&store),
            expenses: RecordSet::load(&store),
            inventory: RecordSet::load(&store),
            tasks: RecordSet::load(&store),
            shipments: RecordSet::load(&store),
            clients: RecordSet::load(&store),
            store,
        }
    }

    // RECORD SETS:

    pub fn sales(&self) -> &RecordSet<Sale> {
        &self.sales
    }

    pub fn sales_mut(&mut self) -> &mut RecordSet<Sale> {
        &mut self.sales
    }

    pub fn expenses(&self) -> &RecordSet<Expense> {
        &self.expenses
    }

    pub fn expenses_mut(&mut self) -> &mut RecordSet<Expense> {
        &mut self.expenses
    }

    pub fn inventory(&self) -> &RecordSet<InventoryItem> {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut RecordSet<InventoryItem> {
        &mut self.inventory
    }

    pub fn tasks(&self) -> &RecordSet<Task> {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut RecordSet<Task> {
        &mut self.tasks
    }

    pub fn shipments(&self) -> &RecordSet<Shipment> {
        &self.shipments
    }

    pub fn shipments_mut(&mut self) -> &mut RecordSet<Shipment> {
        &mut self.shipments
    }

    pub fn clients(&self) -> &RecordSet<Client> {
        &self.clients
    }

    pub fn clients_mut(&mut self) -> &mut RecordSet<Client> {
        &mut self.clients
    }

    // DASHBOARD:

    /// Sales minus expenses.
    pub fn net_balance(&self) -> f64 {
        let income: f64 = self.sales.iter().map(|s| s.amount).sum();
        let spent: f64 = self.expenses.iter().map(|e| e.amount).sum();
        income - spent
    }

    // TIMER:

    pub fn start_task(&mut self, id: i64) -> McProResult<()> {
        self.tasks.modify(id, |t| t.is_running = true)
    }

    pub fn stop_task(&mut self, id: i64) -> McProResult<()> {
        self.tasks.modify(id, |t| t.is_running = false)
    }

    /// One second of wall-clock time has passed. Saves only if a task was running.
    pub fn tick_tasks(&mut self) -> McProResult<bool> {
        self.tasks.modify_all(timer::tick)
    }

    // SINGLETONS:

    pub fn dark_mode(&self) -> bool {
        self.store.load(DARK_MODE_KEY, false)
    }

    pub fn set_dark_mode(&self, enabled: bool) -> McProResult<()> {
        self.store.save(DARK_MODE_KEY, &enabled)
    }

    pub fn settings(&self) -> Settings {
        self.store.load(SETTINGS_KEY, Settings::default())
    }

    pub fn save_settings(&self, settings: &Settings) -> McProResult<()> {
        self.store.save(SETTINGS_KEY, settings)
    }

    /// Personal notes by date (YYYY-MM-DD), in date order.
    pub fn notes(&self) -> BTreeMap<String, String> {
        self.store.load(NOTES_KEY, BTreeMap::new())
    }

    pub fn note(&self, date: NaiveDate) -> Option<String> {
        self.notes().remove(&note_key(date))
    }

    /// Set the note for `date`. Blank text deletes it; deleting the last
    /// note removes the stored key.
    pub fn set_note(&self, date: NaiveDate, text: &str) -> McProResult<()> {
        let mut notes = self.notes();
        let text = text.trim();
        if text.is_empty() {
            notes.remove(&note_key(date));
        } else {
            notes.insert(note_key(date), text.to_string());
        }

        if notes.is_empty() {
            self.store.remove(NOTES_KEY)
        } else {
            self.store.save(NOTES_KEY, &notes)
        }
    }
}

fn note_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a YYYY-MM-DD date given on the command line or in a form.
pub fn parse_date(s: &str) -> McProResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| McProError::InvalidDate(format!("'{s}' (expected YYYY-MM-DD)")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Storage;

    #[test]
    fn test_net_balance() {
        let mut state = AppState::load(PersistedStore::in_memory());
        let sales = [("Taza", 450.0), ("Agenda", 900.0)];
        for (concept, amount) in sales {
            let sale = Sale::new(concept, amount).unwrap();
            state.sales_mut().append(sale).unwrap();
        }
        let expense = Expense::new("Vinilo", 300.5).unwrap();
        state.expenses_mut().append(expense).unwrap();

        assert_eq!(state.net_balance(), 1049.5);
    }

    #[test]
    fn test_empty_state_balance_is_zero() {
        let state = AppState::load(PersistedStore::in_memory());

        assert_eq!(state.net_balance(), 0.0);
        assert!(!state.dark_mode());
        assert_eq!(state.settings(), Settings::default());
    }

    #[test]
    fn test_tick_advances_running_tasks_and_persists() {
        let store = PersistedStore::in_memory();
        let mut state = AppState::load(store.clone());
        let a = Task::new("Stickers").unwrap();
        let b = Task::new("Tazas").unwrap();
        let (a_id, b_id) = (a.id, b.id);
        state.tasks_mut().append(a).unwrap();
        state.tasks_mut().append(b).unwrap();

        assert!(!state.tick_tasks().unwrap());

        state.start_task(a_id).unwrap();
        assert!(state.tick_tasks().unwrap());
        assert!(state.tick_tasks().unwrap());
        state.stop_task(a_id).unwrap();
        assert!(!state.tick_tasks().unwrap());

        let reloaded = AppState::load(store);
        assert_eq!(reloaded.tasks().get(a_id).unwrap().tiempo, 2);
        assert_eq!(reloaded.tasks().get(b_id).unwrap().tiempo, 0);
        assert!(!reloaded.tasks().get(a_id).unwrap().is_running);
    }

    #[test]
    fn test_start_unknown_task_fails() {
        let mut state = AppState::load(PersistedStore::in_memory());

        assert!(matches!(
            state.start_task(7),
            Err(McProError::RecordNotFound { id: 7, .. })
        ));
    }

    #[test]
    fn test_notes_by_date() {
        let store = PersistedStore::in_memory();
        let state = AppState::load(store.clone());
        let date = parse_date("2026-04-19").unwrap();
        let other = parse_date("2026-05-18").unwrap();

        state.set_note(date, "Post 33 Orientales").unwrap();
        state.set_note(other, "Batalla de Las Piedras").unwrap();
        assert_eq!(state.note(date).as_deref(), Some("Post 33 Orientales"));

        state.set_note(date, "  ").unwrap();
        assert_eq!(state.note(date), None);
        assert_eq!(state.notes().len(), 1);

        state.set_note(other, "").unwrap();
        assert!(state.notes().is_empty());
        assert_eq!(store.storage().get(NOTES_KEY), None);
    }

    #[test]
    fn test_dark_mode_and_settings_persist() {
        let store = PersistedStore::in_memory();
        let state = AppState::load(store.clone());

        state.set_dark_mode(true).unwrap();
        state.save_settings(&Settings { margin: 0.6 }).unwrap();

        let reloaded = AppState::load(store);
        assert!(reloaded.dark_mode());
        assert_eq!(reloaded.settings().margin, 0.6);
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("19/04/2026").is_err());
        assert!(parse_date("2026-02-30").is_err());
    }
}
