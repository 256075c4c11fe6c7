use homerce::app::App;
use homerce::command::{Command, CommandError, NewAppointment, NewService};
use homerce::core::entity::Client;
use homerce::core::error::ModelError;
use homerce::core::types::Index;
use homerce::store::{JsonFileStorage, MemoryStorage, Storage, StorageError};
use std::collections::BTreeSet;
use std::fs;
use tracing::info;

fn client(name: &str, phone: &str) -> Client {
    Client::new(
        name.parse().unwrap(),
        phone.parse().unwrap(),
        "someone@example.com".parse().unwrap(),
        BTreeSet::new(),
    )
}

fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

#[test_log::test]
fn test_duplicate_client_phone_is_rejected() {
    let mut app = App::load(MemoryStorage::new(), false).unwrap();

    app.execute(&Command::AddClient(client("Alex Yeoh", "87438807")))
        .unwrap();
    let err = app
        .execute(&Command::AddClient(client("Alex Tan", "87438807")))
        .unwrap_err();

    info!(%err, "Second add failed");
    assert!(matches!(err, CommandError::Model(ModelError::Duplicate(_))));
    assert_eq!(app.model().client_tracker().len(), 1);
}

#[test_log::test]
fn test_undo_on_fresh_session_then_after_add() {
    let mut app = App::load(MemoryStorage::new(), false).unwrap();

    let err = app.execute(&Command::Undo).unwrap_err();
    assert_eq!(err.to_string(), "No more commands to undo!");

    app.execute(&Command::AddClient(client("Alex Yeoh", "87438807")))
        .unwrap();
    app.execute(&Command::Undo).unwrap();
    assert!(app.model().client_tracker().is_empty());
}

#[test_log::test]
fn test_undo_inverse_law() {
    let mut app = App::load(MemoryStorage::new(), true).unwrap();
    let initial = app.model().deep_copy();

    let commands = vec![
        Command::AddService(NewService {
            title: "Facial".parse().unwrap(),
            duration: "1.5".parse().unwrap(),
            price: "55".parse().unwrap(),
        }),
        Command::AddAppointment(NewAppointment {
            date: "02-11-2020".parse().unwrap(),
            time: "1000".parse().unwrap(),
            phone: "99272758".parse().unwrap(),
            code: "SC002".parse().unwrap(),
        }),
        Command::ListAppointment,
        Command::DoneAppointment(index(1)),
        Command::DeleteClient(index(2)),
        Command::ClearRevenue,
    ];
    let mut changed = 0;
    for command in &commands {
        app.execute(command).unwrap();
        if command.is_state_changing() {
            changed += 1;
        }
    }
    assert_eq!(changed, 5);
    assert_ne!(app.model(), &initial);

    for _ in 0..changed {
        app.execute(&Command::Undo).unwrap();
    }
    assert_eq!(app.model(), &initial);
    assert!(app.execute(&Command::Undo).is_err());
}

#[test_log::test]
fn test_revenue_survives_service_deletion() {
    let mut app = App::load(MemoryStorage::new(), true).unwrap();

    app.execute(&Command::DeleteService(index(1))).unwrap();

    let model = app.model();
    assert!(model.service_by_code(&"SC000".parse().unwrap()).is_none());
    let lash_lift = model.filter_revenues(|revenue| revenue.service.title.as_str() == "Lash Lift");
    assert_eq!(lash_lift.len(), 3);
    assert_eq!(lash_lift[0].date.to_string(), "20-10-2020");
}

#[test_log::test]
fn test_failed_command_leaves_model_and_storage_untouched() {
    let storage = MemoryStorage::new();
    let mut app = App::load(storage.clone(), true).unwrap();
    let before = app.model().deep_copy();

    let err = app
        .execute(&Command::AddAppointment(NewAppointment {
            date: "02-11-2020".parse().unwrap(),
            time: "1000".parse().unwrap(),
            phone: "99272758".parse().unwrap(),
            code: "SC042".parse().unwrap(),
        }))
        .unwrap_err();

    assert!(matches!(err, CommandError::UnknownService(_)));
    assert_eq!(app.model(), &before);
    assert!(storage.saved().is_none());
}

#[test_log::test]
fn test_state_changes_are_saved_and_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("homerce.json");

    {
        let mut app = App::load(JsonFileStorage::new(&path), true).unwrap();
        app.execute(&Command::AddClient(client("Zed Tan", "81234567")))
            .unwrap();
        app.execute(&Command::FindClient(vec!["zed".to_string()]))
            .unwrap();
    }

    assert!(path.exists());
    let app = App::load(JsonFileStorage::new(&path), true).unwrap();
    assert_eq!(app.model().client_tracker().len(), 7);
    assert!(app.model().client_by_phone(&"81234567".parse().unwrap()).is_some());
    // Filters are not persisted
    assert_eq!(app.model().filtered_clients().len(), 7);
}

#[test_log::test]
fn test_read_only_commands_do_not_save() {
    let storage = MemoryStorage::new();
    let mut app = App::load(storage.clone(), true).unwrap();

    app.execute(&Command::ListClient).unwrap();
    app.execute(&Command::BreakdownRevenue { month: 10, year: 2020 })
        .unwrap();
    assert!(storage.saved().is_none());

    app.execute(&Command::ClearExpense).unwrap();
    assert!(storage.saved().is_some());
}

#[test_log::test]
fn test_duplicate_identities_in_data_file_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("homerce.json");
    let storage = JsonFileStorage::new(&path);

    let mut state = homerce::core::sample::sample_state().unwrap();
    state.clients.push(state.clients[0].clone());
    storage.save_state(&state).unwrap();

    let err = App::load(JsonFileStorage::new(&path), true)
        .err()
        .expect("duplicate clients must not load");
    assert!(matches!(err, StorageError::DataFormat(_)));
}

#[test_log::test]
fn test_corrupt_data_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("homerce.json");
    fs::write(&path, "{ not json").unwrap();

    let result = App::load(JsonFileStorage::new(&path), true);
    assert!(matches!(result, Err(StorageError::DataFormat(_))));
}

#[test_log::test]
fn test_shell_session_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_content = format!(
        r#"
data_path: "{}"
currency: "S$"
sample_data: true
"#,
        dir.path().display()
    );
    fs::write(config_file.path(), &config_content).expect("Failed to write config file");

    let script = "\
addcli -n Zed Tan -p 81234567 -e zed@example.com
addapt -d 02-11-2020 -t 1000 -p 81234567 -c SC000
done 1
addcli -n Zed Again -p 81234567 -e zed@example.com
breakdownrev 11 2020
exit
listcli
";
    let mut output = Vec::new();
    let result = homerce::run_with_io(
        Some(config_file.path().to_str().unwrap()),
        script.as_bytes(),
        &mut output,
    );
    assert!(result.is_ok(), "Shell failed with: {:?}", result.err());

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("New client added: Zed Tan"));
    assert!(output.contains("Appointment marked as done"));
    assert!(output.contains("This client already exists"));
    assert!(output.contains("Revenue breakdown for 11-2020, total 38.00"));
    assert!(output.contains("S$38.00"));
    // Nothing after `exit` runs
    assert!(!output.contains("Listed all clients"));

    let saved = JsonFileStorage::new(dir.path().join("homerce.json"))
        .load_state()
        .unwrap()
        .unwrap();
    assert_eq!(saved.clients.len(), 7);
    assert_eq!(saved.revenues.len(), 8);
    assert!(saved.appointments[0].is_done);
}
