//! JSON summary of the chosen plan, written by `--plan-json`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use lem_core::SimConfig;
use lem_farm::Farm;
use lem_plan::Plan;

#[derive(Serialize)]
pub struct PlanReport<'a> {
    pub ant_count:         u32,
    pub estimated_turns:   u64,
    pub candidates_scored: u64,
    pub config:            &'a SimConfig,
    pub routes:            Vec<RouteReport<'a>>,
}

/// One chosen route, by room name, with the tokens it carries.
#[derive(Serialize)]
pub struct RouteReport<'a> {
    pub rooms:  Vec<&'a str>,
    pub length: usize,
    pub tokens: u32,
}

impl<'a> PlanReport<'a> {
    pub fn new(plan: &Plan, farm: &'a Farm, config: &'a SimConfig) -> Self {
        let routes = plan
            .routes
            .iter()
            .zip(&plan.allocation)
            .map(|(route, &tokens)| RouteReport {
                rooms: route.names(farm),
                length: route.len(),
                tokens,
            })
            .collect();

        Self {
            ant_count: plan.allocation.iter().sum(),
            estimated_turns: plan.estimated_turns,
            candidates_scored: plan.candidates_scored,
            config,
            routes,
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, self)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}
