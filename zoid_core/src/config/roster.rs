//! Zoid roster loading

use super::ConfigError;
use crate::combatant::ZoidTemplate;
use crate::types::Terrain;
use std::fs;
use std::path::Path;

/// Load a roster from a JSON file
pub fn load_roster(path: &Path) -> Result<Vec<ZoidTemplate>, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_roster(&content)
}

/// Parse a roster from a JSON string
pub fn parse_roster(content: &str) -> Result<Vec<ZoidTemplate>, ConfigError> {
    let roster: Vec<ZoidTemplate> = serde_json::from_str(content)?;
    for template in &roster {
        validate_template(template)?;
    }
    tracing::debug!(zoids = roster.len(), "roster loaded");
    Ok(roster)
}

/// Get the bundled roster
pub fn default_roster() -> Vec<ZoidTemplate> {
    let json = include_str!("../../config/roster.json");
    parse_roster(json).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "bundled roster failed to load");
        Vec::new()
    })
}

/// Templates able to fight on the terrain (speed there above zero)
pub fn filter_for_terrain(roster: &[ZoidTemplate], terrain: Terrain) -> Vec<ZoidTemplate> {
    roster
        .iter()
        .filter(|template| template.fights_on(terrain))
        .cloned()
        .collect()
}

fn validate_template(template: &ZoidTemplate) -> Result<(), ConfigError> {
    if template.name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "roster entry with an empty name".to_string(),
        ));
    }
    for &terrain in Terrain::all() {
        let speed = template.movement.on(terrain);
        if !speed.is_finite() || speed < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: {} speed must be a non-negative number (got {})",
                template.name, terrain, speed
            )));
        }
    }
    if let Some(power) = template
        .powers
        .iter()
        .find(|p| p.effective_rank().is_some_and(|rank| rank < 0))
    {
        return Err(ConfigError::ValidationError(format!(
            "{}: power {} has a negative rank",
            template.name, power.kind
        )));
    }
    Ok(())
}
