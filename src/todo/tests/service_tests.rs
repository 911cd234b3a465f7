//! Unit tests for todo service orchestration against a mocked repository.

use std::sync::Arc;

use crate::card::domain::{CardId, MAX_TODOS_PER_CARD};
use crate::todo::{
    domain::{CheckStatus, NewTodo, Todo, TodoDomainError, TodoErrorCode, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
    services::{
        CreateTodoCommand, DeleteTodoCommand, ReadTodoCommand, TodoService, TodoServiceError,
        UpdateTodoCommand,
    },
};
use async_trait::async_trait;
use mockall::{mock, predicate::eq};
use rstest::{fixture, rstest};

mock! {
    pub TodoRepo {}

    #[async_trait]
    impl TodoRepository for TodoRepo {
        async fn count_todo_by_card_id(&self, card_id: CardId) -> TodoRepositoryResult<usize>;
        async fn exists_by_todo_id(
            &self,
            card_id: CardId,
            todo_id: TodoId,
        ) -> TodoRepositoryResult<bool>;
        async fn find_by_todo_id(
            &self,
            card_id: CardId,
            todo_id: TodoId,
        ) -> TodoRepositoryResult<Option<Todo>>;
        async fn save(&self, todo: &NewTodo) -> TodoRepositoryResult<()>;
        async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()>;
        async fn delete_todo(&self, card_id: CardId, todo_id: TodoId) -> TodoRepositoryResult<()>;
        async fn get_all_todos(&self, card_id: CardId) -> TodoRepositoryResult<Vec<Todo>>;
        async fn delete_all_for_card(&self, card_id: CardId) -> TodoRepositoryResult<()>;
    }
}

const CARD: CardId = CardId::new(1);
const TODO: TodoId = TodoId::new(1);

#[fixture]
fn todo() -> Todo {
    CreateTodoCommand::new(CARD, "할일")
        .to_entity()
        .expect("command should convert")
        .into_todo(TODO)
}

fn service(repo: MockTodoRepo) -> TodoService<MockTodoRepo> {
    TodoService::new(Arc::new(repo))
}

fn existing(repo: &mut MockTodoRepo, todo: &Todo) {
    repo.expect_exists_by_todo_id()
        .with(eq(CARD), eq(TODO))
        .returning(|_, _| Ok(true));
    let stored = todo.clone();
    repo.expect_find_by_todo_id()
        .with(eq(CARD), eq(TODO))
        .returning(move |_, _| Ok(Some(stored.clone())));
}

fn missing(repo: &mut MockTodoRepo) {
    repo.expect_exists_by_todo_id().returning(|_, _| Ok(false));
    repo.expect_find_by_todo_id().never();
}

fn assert_code(result: Result<impl std::fmt::Debug, TodoServiceError>, code: TodoErrorCode) {
    match result {
        Err(err) => assert_eq!(err.code(), Some(code), "unexpected error {err:?}"),
        Ok(value) => panic!("expected {code} but got {value:?}"),
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(MAX_TODOS_PER_CARD - 1)]
#[tokio::test]
async fn create_todo_saves_once_below_capacity(#[case] count: usize) {
    let mut repo = MockTodoRepo::new();
    repo.expect_count_todo_by_card_id()
        .with(eq(CARD))
        .returning(move |_| Ok(count));
    repo.expect_save()
        .withf(|todo| {
            todo.card_id() == CARD
                && todo.item().as_str() == "할일"
                && todo.check_status() == CheckStatus::Unchecked
        })
        .times(1)
        .returning(|_| Ok(()));

    let result = service(repo)
        .create_todo(CreateTodoCommand::new(CARD, "할일"))
        .await;

    assert!(result.is_ok());
}

#[rstest]
#[case(MAX_TODOS_PER_CARD)]
#[case(MAX_TODOS_PER_CARD + 1)]
#[tokio::test]
async fn create_todo_fails_at_capacity_without_saving(#[case] count: usize) {
    let mut repo = MockTodoRepo::new();
    repo.expect_count_todo_by_card_id().returning(move |_| Ok(count));
    repo.expect_save().never();

    let result = service(repo)
        .create_todo(CreateTodoCommand::new(CARD, "할일"))
        .await;

    assert_code(result, TodoErrorCode::CapacityExceeded);
}

#[rstest]
#[tokio::test]
async fn write_time_capacity_rejection_maps_to_same_code() {
    let mut repo = MockTodoRepo::new();
    repo.expect_count_todo_by_card_id().returning(|_| Ok(2));
    repo.expect_save()
        .times(1)
        .returning(|todo| Err(TodoRepositoryError::CapacityExceeded(todo.card_id())));

    let result = service(repo)
        .create_todo(CreateTodoCommand::new(CARD, "할일"))
        .await;

    assert_code(result, TodoErrorCode::CapacityExceeded);
}

#[rstest]
#[tokio::test]
async fn create_todo_with_blank_item_touches_no_repository() {
    let mut repo = MockTodoRepo::new();
    repo.expect_count_todo_by_card_id().never();
    repo.expect_save().never();

    let result = service(repo)
        .create_todo(CreateTodoCommand::new(CARD, "   "))
        .await;

    assert!(matches!(
        result,
        Err(TodoServiceError::Domain(TodoDomainError::EmptyItem))
    ));
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn existence_check_fails_iff_repository_reports_absence(#[case] present: bool) {
    let mut repo = MockTodoRepo::new();
    repo.expect_exists_by_todo_id()
        .with(eq(CARD), eq(TODO))
        .returning(move |_, _| Ok(present));

    let result = service(repo).check_todo_existence(CARD, TODO).await;

    if present {
        assert!(result.is_ok());
    } else {
        assert_code(result, TodoErrorCode::NotFound);
    }
}

#[rstest]
#[tokio::test]
async fn update_with_item_and_status_changes_both(todo: Todo) {
    let mut repo = MockTodoRepo::new();
    existing(&mut repo, &todo);
    repo.expect_update()
        .withf(|updated| {
            updated.item().as_str() == "할 일 변경" && updated.check_status() == CheckStatus::Checked
        })
        .times(1)
        .returning(|_| Ok(()));

    let dto = service(repo)
        .update_todo(UpdateTodoCommand::new(
            CARD,
            TODO,
            Some("할 일 변경".to_owned()),
            Some(CheckStatus::Checked),
        ))
        .await
        .expect("update should succeed");

    assert_eq!(dto.todo_item, "할 일 변경");
    assert_eq!(dto.check_status, CheckStatus::Checked);
}

#[rstest]
#[tokio::test]
async fn update_with_status_only_keeps_item(todo: Todo) {
    let mut repo = MockTodoRepo::new();
    existing(&mut repo, &todo);
    repo.expect_update()
        .withf(|updated| {
            updated.item().as_str() == "할일" && updated.check_status() == CheckStatus::Checked
        })
        .times(1)
        .returning(|_| Ok(()));

    let dto = service(repo)
        .update_todo(UpdateTodoCommand::new(
            CARD,
            TODO,
            None,
            Some(CheckStatus::Checked),
        ))
        .await
        .expect("update should succeed");

    assert_eq!(dto.todo_item, "할일");
}

#[rstest]
#[tokio::test]
async fn update_with_item_only_keeps_status(todo: Todo) {
    let mut repo = MockTodoRepo::new();
    existing(&mut repo, &todo);
    repo.expect_update()
        .withf(|updated| {
            updated.item().as_str() == "Hire a florist"
                && updated.check_status() == CheckStatus::Unchecked
        })
        .times(1)
        .returning(|_| Ok(()));

    let dto = service(repo)
        .update_todo(UpdateTodoCommand::new(
            CARD,
            TODO,
            Some("Hire a florist".to_owned()),
            None,
        ))
        .await
        .expect("update should succeed");

    assert_eq!(dto.check_status, CheckStatus::Unchecked);
}

#[rstest]
#[tokio::test]
async fn update_of_missing_todo_is_not_found() {
    let mut repo = MockTodoRepo::new();
    missing(&mut repo);
    repo.expect_update().never();

    let result = service(repo)
        .update_todo(UpdateTodoCommand::new(
            CARD,
            TODO,
            None,
            Some(CheckStatus::Checked),
        ))
        .await;

    assert_code(result, TodoErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_to_empty_item_is_rejected_before_lookup() {
    let mut repo = MockTodoRepo::new();
    repo.expect_exists_by_todo_id().never();
    repo.expect_update().never();

    let result = service(repo)
        .update_todo(UpdateTodoCommand::new(CARD, TODO, Some(String::new()), None))
        .await;

    assert!(matches!(
        result,
        Err(TodoServiceError::Domain(TodoDomainError::EmptyItem))
    ));
}

#[rstest]
#[tokio::test]
async fn todo_vanishing_after_existence_check_is_not_found() {
    let mut repo = MockTodoRepo::new();
    repo.expect_exists_by_todo_id().returning(|_, _| Ok(true));
    repo.expect_find_by_todo_id().returning(|_, _| Ok(None));
    repo.expect_update().never();

    let result = service(repo)
        .read_todo(ReadTodoCommand::new(CARD, TODO))
        .await;

    assert_code(result, TodoErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_existing_todo_calls_repository() {
    let mut repo = MockTodoRepo::new();
    repo.expect_exists_by_todo_id().returning(|_, _| Ok(true));
    repo.expect_delete_todo()
        .with(eq(CARD), eq(TODO))
        .times(1)
        .returning(|_, _| Ok(()));

    let result = service(repo)
        .delete_todo(DeleteTodoCommand::new(CARD, TODO))
        .await;

    assert!(result.is_ok());
}

#[rstest]
#[tokio::test]
async fn delete_all_for_card_delegates_to_repository() {
    let mut repo = MockTodoRepo::new();
    repo.expect_delete_all_for_card()
        .with(eq(CARD))
        .times(1)
        .returning(|_| Ok(()));

    let result = service(repo).delete_all_for_card(CARD).await;

    assert!(result.is_ok());
}

#[rstest]
fn delete_and_read_commands_expose_their_target() {
    let delete = DeleteTodoCommand::new(CARD, TODO);
    let read = ReadTodoCommand::new(CardId::new(5), TodoId::new(9));

    assert_eq!((delete.card_id(), delete.todo_id()), (CARD, TODO));
    assert_eq!((read.card_id(), read.todo_id()), (CardId::new(5), TodoId::new(9)));
}

#[rstest]
#[tokio::test]
async fn delete_missing_todo_is_not_found() {
    let mut repo = MockTodoRepo::new();
    missing(&mut repo);
    repo.expect_delete_todo().never();

    let result = service(repo)
        .delete_todo(DeleteTodoCommand::new(CARD, TODO))
        .await;

    assert_code(result, TodoErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn get_all_todos_maps_entities_in_repository_order(todo: Todo) {
    let second = CreateTodoCommand::new(CARD, "Choose the menu")
        .to_entity()
        .expect("command should convert")
        .into_todo(TodoId::new(2));
    let todos = vec![todo, second];
    let mut repo = MockTodoRepo::new();
    repo.expect_get_all_todos()
        .with(eq(CARD))
        .times(1)
        .returning(move |_| Ok(todos.clone()));

    let dtos = service(repo)
        .get_all_todos(CARD)
        .await
        .expect("listing should succeed");

    let items: Vec<&str> = dtos.iter().map(|dto| dto.todo_item.as_str()).collect();
    assert_eq!(items, ["할일", "Choose the menu"]);
}

#[rstest]
#[tokio::test]
async fn get_all_todos_on_empty_card_is_not_found() {
    let mut repo = MockTodoRepo::new();
    repo.expect_get_all_todos().returning(|_| Ok(Vec::new()));

    let result = service(repo).get_all_todos(CARD).await;

    assert_code(result, TodoErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn read_todo_returns_dto(todo: Todo) {
    let mut repo = MockTodoRepo::new();
    existing(&mut repo, &todo);

    let dto = service(repo)
        .read_todo(ReadTodoCommand::new(CARD, TODO))
        .await
        .expect("read should succeed");

    assert_eq!(dto.todo_item, "할일");
    assert_eq!(dto.todo_id, TODO);
}

#[rstest]
#[tokio::test]
async fn read_missing_todo_is_not_found() {
    let mut repo = MockTodoRepo::new();
    missing(&mut repo);

    let result = service(repo)
        .read_todo(ReadTodoCommand::new(CARD, TODO))
        .await;

    assert_code(result, TodoErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn persistence_failures_are_not_rule_violations() {
    let mut repo = MockTodoRepo::new();
    repo.expect_get_all_todos().returning(|_| {
        Err(TodoRepositoryError::persistence(std::io::Error::other(
            "connection reset",
        )))
    });

    let result = service(repo).get_all_todos(CARD).await;

    assert!(matches!(result, Err(TodoServiceError::Repository(_))));
}
