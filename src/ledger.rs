// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Currency, SortKey, Theme, Transaction, TxKind};
use crate::prompt::Prompt;
use crate::seed::SeedProvider;
use crate::store::{KvStore, THEME_KEY, TRANSACTIONS_KEY};
use crate::surface::Surface;
use crate::utils::parse_amount;
use crate::view::{compute_balance, compute_view, render_balance, render_rows};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this transaction?";
pub const AMOUNT_NOT_POSITIVE: &str = "The amount must be greater than zero!";
pub const AMOUNT_TOO_LARGE: &str = "The amount is too large!";

/// Largest amount a single transaction may carry, in currency units.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Declined,
    Removed,
    NotFound,
}

/// Millisecond timestamps, bumped past the previous id when the clock has
/// not advanced.
#[derive(Debug, Default)]
struct IdGen {
    last: i64,
}

impl IdGen {
    fn primed(existing: &[Transaction]) -> Self {
        Self {
            last: existing.iter().map(|t| t.id).max().unwrap_or(0),
        }
    }

    fn next(&mut self, existing: &[Transaction]) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let id = match self.last.checked_add(1) {
            Some(bumped) => now.max(bumped),
            None => {
                // i64::MAX already used; restart from the clock past any taken id
                let mut id = now;
                while existing.iter().any(|t| t.id == id) {
                    id = id.checked_add(1).unwrap_or(1);
                }
                id
            }
        };
        self.last = id;
        id
    }
}

/// Owns the ledger and theme, derives the view and balance, and keeps the
/// store in sync after every mutation.
pub struct LedgerViewModel<S: KvStore, P: Prompt, D: Surface> {
    transactions: Vec<Transaction>,
    theme: Theme,
    search: String,
    sort: SortKey,
    currency: Currency,
    ids: IdGen,
    store: S,
    prompt: P,
    surface: D,
}

impl<S: KvStore, P: Prompt, D: Surface> LedgerViewModel<S, P, D> {
    /// Restores state from `store`, falling back to `seed` and then to an
    /// empty ledger. Never fails.
    pub fn init(
        store: S,
        seed: &dyn SeedProvider,
        prompt: P,
        surface: D,
        currency: Currency,
    ) -> Self {
        let transactions = load_transactions(&store, seed);
        let theme = match store.get(THEME_KEY) {
            Ok(v) => Theme::from_stored(v.as_deref()),
            Err(err) => {
                warn!(error = %format!("{:#}", err), "theme unreadable, using light");
                Theme::Light
            }
        };
        info!(count = transactions.len(), theme = %theme, "ledger initialized");

        let mut vm = Self {
            ids: IdGen::primed(&transactions),
            transactions,
            theme,
            search: String::new(),
            sort: SortKey::default(),
            currency,
            store,
            prompt,
            surface,
        };
        vm.surface.apply_theme(vm.theme);
        vm.refresh();
        vm
    }

    /// Returns the new id, or `None` when the amount was rejected (the user
    /// has been notified and nothing changed).
    pub fn add(
        &mut self,
        description: &str,
        amount: &str,
        date: &str,
        kind: TxKind,
    ) -> LedgerResult<Option<i64>> {
        let amount = match positive_amount(amount) {
            Ok(a) => a,
            Err(err) => {
                debug!(%err, "amount rejected");
                let message = match err {
                    LedgerError::NonPositiveAmount(_) => AMOUNT_NOT_POSITIVE.to_string(),
                    LedgerError::AmountTooLarge { .. } => AMOUNT_TOO_LARGE.to_string(),
                    other => other.to_string(),
                };
                self.prompt.notify(&message);
                return Ok(None);
            }
        };

        let tx = Transaction {
            id: self.ids.next(&self.transactions),
            description: description.to_string(),
            amount,
            date: date.to_string(),
            r#type: kind,
        };
        let id = tx.id;
        info!(id, kind = %kind, %amount, "transaction added");
        self.transactions.push(tx);

        self.refresh();
        self.persist()?;
        self.surface.reset_form();
        Ok(Some(id))
    }

    /// Declining the confirmation leaves everything untouched. A confirmed
    /// delete always rewrites the snapshot, even when no id matched.
    pub fn remove(&mut self, id: i64) -> LedgerResult<Removal> {
        if !self.prompt.confirm(CONFIRM_DELETE) {
            debug!(id, "delete declined");
            return Ok(Removal::Declined);
        }
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            info!(id, "transaction removed");
        } else {
            debug!(id, "no transaction with that id");
        }

        self.refresh();
        self.persist()?;
        Ok(if removed {
            Removal::Removed
        } else {
            Removal::NotFound
        })
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.refresh();
    }

    pub fn toggle_theme(&mut self) -> LedgerResult<Theme> {
        self.theme = self.theme.toggled();
        self.surface.apply_theme(self.theme);
        self.store.set(THEME_KEY, self.theme.as_str())?;
        info!(theme = %self.theme, "theme toggled");
        Ok(self.theme)
    }

    pub fn view(&self) -> Vec<Transaction> {
        compute_view(&self.transactions, &self.search, self.sort)
    }

    pub fn balance(&self) -> Decimal {
        compute_balance(&self.transactions)
    }

    /// Pushes the current view and balance to the surface.
    pub fn refresh(&mut self) {
        let rows = render_rows(&self.view(), self.currency);
        self.surface.replace_rows(&rows);
        self.surface
            .show_balance(&render_balance(self.balance(), self.currency));
    }

    fn persist(&self) -> LedgerResult<()> {
        let raw = serde_json::to_string(&self.transactions)?;
        self.store.set(TRANSACTIONS_KEY, &raw)?;
        debug!(count = self.transactions.len(), "snapshot written");
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}

fn positive_amount(raw: &str) -> LedgerResult<Decimal> {
    let amount = parse_amount(raw)?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount));
    }
    let limit = Decimal::from(MAX_AMOUNT_UNITS);
    if amount > limit {
        return Err(LedgerError::AmountTooLarge { amount, limit });
    }
    Ok(amount)
}

fn load_transactions(store: &dyn KvStore, seed: &dyn SeedProvider) -> Vec<Transaction> {
    let restored = match store.get(TRANSACTIONS_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<Transaction>>(&raw) {
            Ok(v) => Some(v),
            Err(err) => {
                warn!(%err, "persisted ledger is malformed, discarding");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!(error = %format!("{:#}", err), "persisted ledger unreadable");
            None
        }
    };
    let list = match restored {
        Some(v) => v,
        None => {
            debug!("no persisted ledger, trying seed");
            seed.seed().unwrap_or_default()
        }
    };
    list.into_iter()
        .filter(|t| {
            let ok = t.amount > Decimal::ZERO;
            if !ok {
                warn!(id = t.id, amount = %t.amount, "dropping non-positive amount");
            }
            ok
        })
        .collect()
}
