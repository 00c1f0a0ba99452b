// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::LedgerViewModel;
use crate::surface::TerminalSurface;

/// View-model as driven from the command line.
pub type App<S, P> = LedgerViewModel<S, P, TerminalSurface>;

pub mod transactions;
pub mod balance;
pub mod theme;
pub mod exporter;
