// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Theme;
use crate::utils::pretty_table;
use crate::view::{BalanceSign, BalanceView, ViewRow};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};

/// Where the view-model's derived output lands. Each call replaces what the
/// previous call displayed.
pub trait Surface {
    fn replace_rows(&mut self, rows: &[ViewRow]);
    fn show_balance(&mut self, balance: &BalanceView);
    fn apply_theme(&mut self, theme: Theme);
    fn reset_form(&mut self) {}
}

#[derive(Debug, Default)]
pub struct TerminalSurface {
    rows: Vec<ViewRow>,
    balance: Option<BalanceView>,
    theme: Theme,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ViewRow] {
        &self.rows
    }

    pub fn balance(&self) -> Option<&BalanceView> {
        self.balance.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn preset(&self) -> &'static str {
        match self.theme {
            Theme::Dark => UTF8_FULL,
            Theme::Light => ASCII_FULL,
        }
    }

    pub fn print_rows(&self) {
        let data: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(self.preset(), &["ID", "Date", "Description", "Amount"], data)
        );
    }

    pub fn print_balance(&self) {
        if let Some(b) = &self.balance {
            let marker = match b.sign {
                BalanceSign::NonNegative => "positive",
                BalanceSign::Negative => "negative",
            };
            println!("Balance: {} ({})", b.formatted, marker);
        }
    }
}

impl Surface for TerminalSurface {
    fn replace_rows(&mut self, rows: &[ViewRow]) {
        self.rows = rows.to_vec();
    }

    fn show_balance(&mut self, balance: &BalanceView) {
        self.balance = Some(balance.clone());
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

/// Keeps the last output and counts calls; used to observe the view-model.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub rows: Vec<ViewRow>,
    pub balance: Option<BalanceView>,
    pub theme: Option<Theme>,
    pub renders: usize,
    pub form_resets: usize,
}

impl Surface for RecordingSurface {
    fn replace_rows(&mut self, rows: &[ViewRow]) {
        self.rows = rows.to_vec();
        self.renders += 1;
    }

    fn show_balance(&mut self, balance: &BalanceView) {
        self.balance = Some(balance.clone());
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn reset_form(&mut self) {
        self.form_resets += 1;
    }
}
