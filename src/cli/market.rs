//! Market command implementation
//!
//! Display only: listings and rewards cannot be bought here.

use anyhow::Result;
use std::io::Write;

use habitquest::domain::PROOF_TOKEN_MIN_STREAK;
use habitquest::session::Session;

pub fn market_command(session: &Session, out: &mut dyn Write) -> Result<()> {
    let profile = &session.state().profile;
    let content = session.content();

    writeln!(out, "Proof token bazaar ({} coins available)\n", profile.currency())?;
    if content.listings.is_empty() {
        writeln!(out, "  No listings.")?;
    }
    for listing in &content.listings {
        writeln!(
            out,
            "  {} {:<14} {:>4}-day streak  {:>5} coins  by {}  [{}]{}",
            listing.id,
            listing.habit_name,
            listing.streak_length,
            listing.price,
            listing.seller_name,
            listing.status,
            if listing.is_available() && profile.can_afford(listing.price) {
                "  affordable"
            } else {
                ""
            }
        )?;
    }

    writeln!(out, "\nReward shop:")?;
    for reward in &content.rewards {
        writeln!(
            out,
            "  {:<20} {:>5} coins{}",
            reward.title,
            reward.price,
            if profile.can_afford(reward.price) {
                "  affordable"
            } else {
                ""
            }
        )?;
    }

    writeln!(
        out,
        "\nReach a {}+ day streak on any habit to mint a proof token.",
        PROOF_TOKEN_MIN_STREAK
    )?;
    let eligible: Vec<_> = session
        .state()
        .habits
        .iter()
        .filter(|h| h.is_proof_token_eligible())
        .collect();
    for habit in eligible {
        writeln!(out, "  Eligible: {} ({} days)", habit.name, habit.current_streak)?;
    }

    Ok(())
}
