//! Given steps for todo capacity BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use wedding::card::services::CreateCardCommand;
use wedding::todo::services::CreateTodoCommand;

#[given(r#"a card titled "{title}""#)]
fn card_titled(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    let card = run_async(world.cards.create_card(CreateCardCommand::new(title)))
        .wrap_err("create scenario card")?;
    world.card_id = Some(card.id());
    Ok(())
}

#[given("the card already holds {count:usize} todos")]
fn card_holds_todos(world: &mut TodoWorld, count: usize) -> Result<(), eyre::Report> {
    let card_id = world.card_id()?;
    for index in 1..=count {
        run_async(
            world
                .todos
                .create_todo(CreateTodoCommand::new(card_id, format!("Prepared item {index}"))),
        )
        .wrap_err_with(|| format!("seed todo {index}"))?;
    }
    Ok(())
}
