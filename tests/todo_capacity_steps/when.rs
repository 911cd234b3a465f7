//! When steps for todo capacity BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use wedding::todo::services::{CreateTodoCommand, DeleteTodoCommand};

#[when(r#"a todo "{item}" is added to the card"#)]
fn add_todo(world: &mut TodoWorld, item: String) -> Result<(), eyre::Report> {
    let card_id = world.card_id()?;
    world.last_create_result = Some(run_async(
        world.todos.create_todo(CreateTodoCommand::new(card_id, item)),
    ));
    Ok(())
}

#[when("the first todo on the card is deleted")]
fn delete_first_todo(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let card_id = world.card_id()?;
    let todos = run_async(world.todos.get_all_todos(card_id)).wrap_err("list todos")?;
    let first = todos
        .first()
        .ok_or_else(|| eyre::eyre!("card has no todos to delete"))?;
    run_async(
        world
            .todos
            .delete_todo(DeleteTodoCommand::new(card_id, first.todo_id)),
    )
    .wrap_err("delete first todo")?;
    Ok(())
}

#[when("the todos of the card are listed")]
fn list_todos(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let card_id = world.card_id()?;
    world.last_list_result = Some(run_async(world.todos.get_all_todos(card_id)));
    Ok(())
}
