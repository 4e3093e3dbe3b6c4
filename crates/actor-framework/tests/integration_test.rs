use actor_framework::{ActorEntity, FrameworkError, ResourceActor, SequentialIds};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Counter {
    id: u64,
    label: String,
    value: u32,
}

#[derive(Debug)]
struct CounterCreate {
    label: String,
}

#[derive(Debug)]
struct CounterUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum CounterAction {
    Bump,
    Reset,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum CounterError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("label is reserved: {0}")]
    Reserved(String),
    #[error("counter is locked")]
    Locked,
}

#[async_trait]
impl ActorEntity for Counter {
    type Id = u64;
    type Create = CounterCreate;
    type Update = CounterUpdate;
    type Action = CounterAction;
    type ActionResult = u32;
    type Context = ();
    type Error = CounterError;

    fn from_create_params(id: u64, params: CounterCreate) -> Result<Self, Self::Error> {
        if params.label.is_empty() {
            return Err(CounterError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            value: 0,
        })
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        if self.label == "admin" {
            return Err(CounterError::Reserved(self.label.clone()));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: CounterUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.label == "locked" {
            return Err(CounterError::Locked);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: CounterAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            CounterAction::Bump => self.value += 1,
            CounterAction::Reset => self.value = 0,
        }
        Ok(self.value)
    }
}

fn create(label: &str) -> CounterCreate {
    CounterCreate {
        label: label.to_string(),
    }
}

#[tokio::test]
async fn crud_and_actions_against_a_real_actor() {
    let (actor, client) = ResourceActor::<Counter>::new(10, SequentialIds::new());
    let handle = tokio::spawn(actor.run(()));

    let id = client.create(create("dosa")).await.unwrap();
    assert_eq!(id, 1);

    assert_eq!(client.perform_action(id, CounterAction::Bump).await.unwrap(), 1);
    assert_eq!(client.perform_action(id, CounterAction::Bump).await.unwrap(), 2);
    assert_eq!(client.perform_action(id, CounterAction::Reset).await.unwrap(), 0);

    let updated = client
        .update(
            id,
            CounterUpdate {
                label: Some("idli".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "idli");

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn list_keeps_insertion_order_after_deletes() {
    let (actor, client) = ResourceActor::<Counter>::new(10, SequentialIds::new());
    tokio::spawn(actor.run(()));

    for label in ["a", "b", "c", "d"] {
        client.create(create(label)).await.unwrap();
    }
    client.delete(2).await.unwrap();

    let labels: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(labels, ["a", "c", "d"]);

    assert_eq!(client.clear().await.unwrap(), 3);
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_ids_are_reported_as_not_found() {
    let (actor, client) = ResourceActor::<Counter>::new(10, SequentialIds::new());
    tokio::spawn(actor.run(()));

    let err = client.perform_action(42, CounterAction::Bump).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "42"));
    assert!(client.delete(42).await.unwrap_err().is_not_found());
    assert!(client.get(42).await.unwrap().is_none());
}

#[tokio::test]
async fn failed_hooks_leave_the_store_untouched() {
    let (actor, client) = ResourceActor::<Counter>::new(10, SequentialIds::new());
    tokio::spawn(actor.run(()));

    let err = client.create(create("")).await.unwrap_err();
    assert_eq!(err.into_entity_error::<CounterError>().unwrap(), CounterError::EmptyLabel);

    let err = client.create(create("admin")).await.unwrap_err();
    assert_eq!(
        err.into_entity_error::<CounterError>().unwrap(),
        CounterError::Reserved("admin".into())
    );
    assert!(client.list().await.unwrap().is_empty());

    let id = client.create(create("locked")).await.unwrap();
    let err = client.delete(id).await.unwrap_err();
    assert_eq!(err.into_entity_error::<CounterError>().unwrap(), CounterError::Locked);
    assert!(client.get(id).await.unwrap().is_some());
}

#[tokio::test]
async fn colliding_generated_ids_are_refused() {
    let (actor, client) = ResourceActor::<Counter>::new(10, || 7u64);
    tokio::spawn(actor.run(()));

    assert_eq!(client.create(create("first")).await.unwrap(), 7);
    let err = client.create(create("second")).await.unwrap_err();
    assert!(matches!(err, FrameworkError::Conflict(ref id) if id == "7"));

    let kept = client.get(7).await.unwrap().unwrap();
    assert_eq!(kept.label, "first");
}

#[tokio::test]
async fn closed_actor_is_reported_to_clients() {
    let (actor, client) = ResourceActor::<Counter>::new(10, SequentialIds::new());
    drop(actor);

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
