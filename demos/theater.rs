/// Theater example — a short scene with narration, a monologue, and a
/// two-option branch, written to `output.json`.
///
/// Run with: cargo run --example theater

use kspeak::{build_scene, Speaker};

fn main() {
    let player = Speaker::new("Player").expect("valid speaker");
    let john = Speaker::new("John").expect("valid speaker");

    let scene = build_scene(|scene| {
        scene.version(1);
        scene.output_to_file("output.json");

        scene.parts(|parts| {
            parts.background("backgrounds/bedroom.png")?;

            parts.dialogue(|d| {
                d.narrate("I haven't felt this way in a long time.")?;
                d.narrate("I feel the blood rushing to my head, watching this compile...")?;
                d.narrate("Success!")?;

                d.line(john.speak(format!("Hey, {player}, what are you up to?"))?);
                d.narrate("I jolt up, startled.")?;

                d.monologue(|m| {
                    m.say(player.speak("Ahh! I didn't see you come in.")?);
                    m.say(john.speak_with_image("The door was open.", "gesture1")?);
                    m.say(player.speak("Oh.")?);
                    m.say(player.speak("I, uh, was compiling a package...")?);
                    Ok(())
                })?;

                d.line(john.speak("Ah. You want to come to the theater with me?")?);
                Ok(())
            })?;

            parts.sprite("characters/john_smile.png")?;

            parts.branch(|b| {
                b.option("Sure.", |d| {
                    d.line(john.speak("Great. I'll see you in an hour.")?);
                    Ok(())
                })?;
                b.option("Maybe next time.", |d| {
                    d.line(john.speak("Sure, I'll let you know of any future shows.")?);
                    Ok(())
                })
            })?;

            parts.dialogue(|d| d.narrate("John leaves the room."))
        })
    })
    .expect("Failed to build scene");

    println!("{}", scene);
    println!("Wrote {} parts to output.json", scene.part_list().len());
}
