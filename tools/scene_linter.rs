/// Scene Linter — checks a scene document for structural problems.
///
/// Usage: scene_linter <scene.json> [--strict]

use kspeak::schema::scene_part::ScenePart;
use kspeak::Scene;
use rustc_hash::FxHashSet;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: scene_linter <scene.json> [--strict]");
        process::exit(0);
    }

    let scene_path = &args[1];
    let strict = args[2..].iter().any(|a| a == "--strict");

    let contents = std::fs::read_to_string(scene_path).unwrap_or_else(|e| {
        eprintln!("ERROR: Failed to read '{}': {}", scene_path, e);
        process::exit(1);
    });

    let scene = Scene::from_json_str(&contents).unwrap_or_else(|e| {
        eprintln!("ERROR: '{}' is not a valid scene document: {}", scene_path, e);
        process::exit(1);
    });

    println!(
        "Loaded scene version {} with {} parts",
        scene.version_str(),
        scene.part_list().len()
    );

    let warnings = lint_scene(&scene);

    println!("\n=== Scene Lint Report ===\n");

    if warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    println!("\nSummary: {} warnings", warnings.len());

    if strict && !warnings.is_empty() {
        process::exit(1);
    }
}

fn lint_scene(scene: &Scene) -> Vec<String> {
    let mut warnings = Vec::new();

    if scene.part_list().is_empty() {
        warnings.push("Scene has no parts".to_string());
    }

    for (index, part) in scene.part_list().iter().enumerate() {
        let label = format!("Part {} ({})", index + 1, part.kind().tag());
        match part {
            ScenePart::Dialogue { dialogue } => {
                if dialogue.is_empty() {
                    warnings.push(format!("{} has no lines", label));
                }
            }
            ScenePart::Branch { branch, .. } => {
                if branch.len() < 2 {
                    warnings.push(format!(
                        "{} has only {} option(s) (a choice needs at least 2)",
                        label,
                        branch.len()
                    ));
                }

                let mut seen = FxHashSet::default();
                for option in branch {
                    if !seen.insert(option.name()) {
                        warnings.push(format!(
                            "{} repeats option name '{}'",
                            label,
                            option.name()
                        ));
                    }
                    if option.dialogue().is_empty() {
                        warnings.push(format!(
                            "{} option '{}' has no follow-up dialogue",
                            label,
                            option.name()
                        ));
                    }
                }
            }
            ScenePart::ImageChange {
                image_change_request: change,
            } => {
                let background = !change.background_image().is_empty();
                let sprite = !change.character_image().is_empty();
                if background == sprite {
                    warnings.push(format!(
                        "{} should set exactly one of backgroundImage and characterImage",
                        label
                    ));
                }
            }
        }
    }

    warnings
}
