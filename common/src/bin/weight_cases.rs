use photo_rank_common::catalog::{self, sample_profile};
use photo_rank_common::{rank, ClientProfile, ScoringWeights};
use std::env;
use std::path::Path;

const TOP: usize = 5;

fn main() -> photo_rank_common::Result<()> {
    let args: Vec<String> = env::args().collect();

    let photos = match args.get(1) {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                eprintln!("Catalog not found: {}", path.display());
                eprintln!("Usage: weight_cases [catalog.json]");
                std::process::exit(1);
            }
            catalog::from_file(path)?
        }
        None => catalog::sample_catalog(),
    };

    let cases = [
        ("default", ScoringWeights::default()),
        ("technical_heavy", ScoringWeights::new(70.0, 15.0, 15.0)),
        ("storytelling_heavy", ScoringWeights::new(15.0, 70.0, 15.0)),
        ("alignment_heavy", ScoringWeights::new(15.0, 15.0, 70.0)),
        ("balanced", ScoringWeights::new(33.0, 33.0, 33.0)),
    ];
    let profiles = [("no_profile", ClientProfile::default()), ("sample_profile", sample_profile())];

    for (profile_name, profile) in &profiles {
        println!("== {} ==", profile_name);
        for (case_name, weights) in &cases {
            let normalized = weights.normalize()?;
            let ranked = rank(&photos, &normalized, profile);

            let top: Vec<String> = ranked
                .iter()
                .take(TOP)
                .map(|e| format!("{}({:.3})", e.photo.id, e.score))
                .collect();
            println!("{:<20} [{}] {}", case_name, weights, top.join(" "));
        }
        println!();
    }

    println!("Catalog: {} photos", photos.len());

    Ok(())
}
