/// Scene Preview — prints a scene document as a readable screenplay.
///
/// Usage: scene_preview <scene.json>

use kspeak::schema::dialogue::DialogueBlock;
use kspeak::schema::scene_part::ScenePart;
use kspeak::Scene;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: scene_preview <scene.json>");
        process::exit(if args.len() == 2 { 0 } else { 1 });
    }

    let contents = std::fs::read_to_string(&args[1]).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", args[1], e);
        process::exit(1);
    });

    let scene = Scene::from_json_str(&contents).unwrap_or_else(|e| {
        eprintln!("Error parsing '{}': {}", args[1], e);
        process::exit(1);
    });

    print!("{}", render(&scene));
}

fn render(scene: &Scene) -> String {
    let mut out = format!("=== Scene (schema v{}) ===\n", scene.version_str());

    for part in scene.part_list() {
        out.push('\n');
        match part {
            ScenePart::Dialogue { dialogue } => render_dialogue(&mut out, dialogue, ""),
            ScenePart::Branch { branch, options } => {
                let rule = if options.wait_for_all {
                    "visit every option"
                } else {
                    "pick one"
                };
                out.push_str(&format!("CHOICE ({}):\n", rule));
                for (i, option) in branch.options().iter().enumerate() {
                    out.push_str(&format!("  {}. {}\n", i + 1, option.name()));
                    render_dialogue(&mut out, option.dialogue(), "     ");
                }
            }
            ScenePart::ImageChange {
                image_change_request: change,
            } => {
                if !change.background_image().is_empty() {
                    out.push_str(&format!("[background: {}]\n", change.background_image()));
                }
                if !change.character_image().is_empty() {
                    out.push_str(&format!("[sprite: {}]\n", change.character_image()));
                }
            }
        }
    }

    out
}

fn render_dialogue(out: &mut String, dialogue: &DialogueBlock, indent: &str) {
    for line in dialogue {
        out.push_str(indent);
        out.push_str(&line.speaker().to_uppercase());
        out.push_str(": ");
        out.push_str(line.text());
        if let Some(image) = line.image() {
            out.push_str(&format!(" [{}]", image));
        }
        out.push('\n');
    }
}
