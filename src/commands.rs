//! Command dispatch for the turfrank CLI

use std::path::PathBuf;

use turfrank_core::artifacts::Artifacts;
use turfrank_core::config::ServiceConfig;
use turfrank_core::error::Result;
use turfrank_core::feature::FeatureMode;
use turfrank_core::rank::RankingService;
use turfrank_core::similarity::SimilarityService;
use turfrank_core::store::JsonStore;

use crate::cli::{Cli, Commands, OutputFormat};

/// Resolved runtime settings: flags take precedence over `turfrank.toml`,
/// which takes precedence over built-in defaults.
struct Runtime {
    store: JsonStore,
    artifacts: Artifacts,
    default_limit: usize,
}

fn resolve(cli: &Cli) -> Result<Runtime> {
    // A missing turfrank.toml falls back to defaults inside discover;
    // a malformed one is a real error and must surface, not be masked
    let config = ServiceConfig::discover(&std::env::current_dir()?)?;

    let data_path: PathBuf = cli.data.clone().unwrap_or(config.data_path);
    let artifacts_dir: PathBuf = cli.artifacts.clone().unwrap_or(config.artifacts_dir);

    Ok(Runtime {
        store: JsonStore::open(&data_path)?,
        artifacts: Artifacts::load(&artifacts_dir)?,
        default_limit: config.default_limit,
    })
}

/// Run the requested command
pub fn run(cli: &Cli) -> Result<()> {
    let runtime = resolve(cli)?;

    match &cli.command {
        Commands::TopRanked { limit } => {
            let service = RankingService::new(&runtime.artifacts, &runtime.store);
            let ranked = service.top_ranked(limit.unwrap_or(runtime.default_limit))?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
                OutputFormat::Human => {
                    for (i, turf) in ranked.iter().enumerate() {
                        println!(
                            "{}. {} ({}) score {:.4}  rating {:.1} over {} reviews  {:.0}/hr",
                            i + 1,
                            turf.name,
                            turf.id,
                            turf.predicted_score,
                            turf.average_rating,
                            turf.review_count,
                            turf.price_per_hour,
                        );
                    }
                }
            }
        }

        Commands::Similar { turf_id, limit } => {
            let service = SimilarityService::new(&runtime.artifacts, &runtime.store);
            let similar = service.find_similar(turf_id, limit.unwrap_or(runtime.default_limit))?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&similar)?),
                OutputFormat::Human => {
                    for (i, turf) in similar.iter().enumerate() {
                        println!(
                            "{}. {} ({}) similarity {:.4}",
                            i + 1,
                            turf.name,
                            turf.id,
                            turf.similarity_score,
                        );
                    }
                }
            }
        }

        Commands::Artifacts => {
            let schema = runtime.artifacts.schema();
            match cli.format {
                OutputFormat::Json => {
                    let value = serde_json::json!({
                        "amenities_dim": schema.amenities_dim,
                        "description_dim": schema.description_dim,
                        "comments_dim": schema.comments_dim,
                        "ranking_width": schema.width(FeatureMode::Ranking),
                        "similarity_width": schema.width(FeatureMode::Similarity),
                        "model_trees": runtime.artifacts.model.trees.len(),
                    });
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                OutputFormat::Human => {
                    println!("amenities dim:    {}", schema.amenities_dim);
                    println!("description dim:  {}", schema.description_dim);
                    println!("comments dim:     {}", schema.comments_dim);
                    println!("ranking width:    {}", schema.width(FeatureMode::Ranking));
                    println!("similarity width: {}", schema.width(FeatureMode::Similarity));
                    println!("model trees:      {}", runtime.artifacts.model.trees.len());
                }
            }
        }
    }

    Ok(())
}
