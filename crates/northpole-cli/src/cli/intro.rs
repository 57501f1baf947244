//! `northpole intro`: print one typed greeting.
//!
//! Needs no credentials: the greeting comes from the built-in catalog and
//! nothing is logged.

use std::time::Duration;

use northpole_core::agent::intro::{choose_intro, intro_from};

use crate::state::AppState;

use super::ui::type_out;

pub async fn run_intro(state: &AppState, delay_ms: Option<u64>) -> anyhow::Result<()> {
    let delay = delay_ms.map_or_else(|| state.typing_delay(), Duration::from_millis);
    println!();
    type_out(intro_from(choose_intro(), delay)).await;
    println!();
    Ok(())
}
