//! Then steps for todo capacity BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use wedding::todo::services::TodoServiceError;

fn error_code(err: &TodoServiceError) -> Option<&'static str> {
    err.code().map(|code| code.as_str())
}

#[then("the todo is stored")]
fn todo_stored(world: &TodoWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected todo creation failure: {err}"))?;
    Ok(())
}

#[then(r#"the todo is rejected with code "{code}""#)]
fn todo_rejected(world: &TodoWorld, code: String) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    match result {
        Ok(()) => Err(eyre::eyre!("expected rejection with {code}, todo was stored")),
        Err(err) if error_code(err) == Some(code.as_str()) => Ok(()),
        Err(err) => Err(eyre::eyre!("expected {code}, got {err}")),
    }
}

#[then("the card holds {count:usize} todos")]
fn card_holds(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    let card_id = world.card_id()?;
    let todos = run_async(world.todos.get_all_todos(card_id)).wrap_err("list todos")?;
    if todos.len() != count {
        return Err(eyre::eyre!("expected {count} todos, found {}", todos.len()));
    }
    Ok(())
}

#[then(r#"the last todo on the card reads "{item}""#)]
fn last_todo_reads(world: &TodoWorld, item: String) -> Result<(), eyre::Report> {
    let card_id = world.card_id()?;
    let todos = run_async(world.todos.get_all_todos(card_id)).wrap_err("list todos")?;
    let last = todos
        .last()
        .ok_or_else(|| eyre::eyre!("card has no todos"))?;
    if last.todo_item != item {
        return Err(eyre::eyre!(
            "expected last todo {item:?}, found {:?}",
            last.todo_item
        ));
    }
    Ok(())
}

#[then(r#"the listing fails with code "{code}""#)]
fn listing_fails(world: &TodoWorld, code: String) -> Result<(), eyre::Report> {
    let result = world
        .last_list_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing list result in scenario world"))?;
    match result {
        Ok(todos) => Err(eyre::eyre!(
            "expected {code}, listing returned {} todos",
            todos.len()
        )),
        Err(err) if error_code(err) == Some(code.as_str()) => Ok(()),
        Err(err) => Err(eyre::eyre!("expected {code}, got {err}")),
    }
}
