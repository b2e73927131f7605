use crate::cli::{DeleteArgs, ObjectCreateArgs, ObjectUpdateArgs, ObjectsCommand, SearchArgs};
use crate::console::Console;
use crate::error::ConsoleError;
use crate::messages::{CREATE_OBJECT_FAILED, GENERIC_ERROR, NO_DATA, UPDATE_OBJECT_FAILED};
use crate::render::{optional, table};
use std::io::Write;
use tc_filter::search_objects;
use tc_forms::PowerObjectForm;
use tc_normalize::object_type_label;

const OBJECTS_PATH: &str = "/admin/objects";

pub async fn run(
    command: ObjectsCommand,
    console: &mut Console,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    console.enter(OBJECTS_PATH)?;
    match command {
        ObjectsCommand::List(args) => list(console, args, out).await,
        ObjectsCommand::Create(args) => create(console, args, out).await,
        ObjectsCommand::Update(args) => update(console, args, out).await,
        ObjectsCommand::Delete(args) => delete(console, args, out).await,
    }
}

async fn list(console: &Console, args: SearchArgs, out: &mut dyn Write) -> Result<(), ConsoleError> {
    let objects = console
        .resources()
        .objects()
        .await
        .map_err(ConsoleError::Load)?;
    let found = search_objects(&objects, &args.search);
    if found.is_empty() {
        writeln!(out, "{NO_DATA}")?;
        return Ok(());
    }
    let headers = ["ID", "Название", "Тип", "Мощность (МВт)", "Мощность (кВт)", "Описание"];
    let rows = found.iter().map(|object| {
        vec![
            object.id.to_string(),
            object.name.clone(),
            object_type_label(object.object_type).to_string(),
            object.max_power_mw.to_string(),
            object.max_power_kw.to_string(),
            optional(object.description.as_deref()),
        ]
    });
    writeln!(out, "{}", table(&headers, rows))?;
    Ok(())
}

async fn create(
    console: &Console,
    args: ObjectCreateArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let form = PowerObjectForm {
        name: args.name,
        object_type: args.object_type,
        unit: args.unit,
        value: args.value,
        description: args.description.unwrap_or_default(),
    };
    let request = form.validate()?;
    writeln!(out, "{}", form.preview())?;
    let object = console
        .resources()
        .create_object(&request)
        .await
        .map_err(ConsoleError::request(CREATE_OBJECT_FAILED))?;
    writeln!(out, "Объект создан (ID {})", object.id)?;
    Ok(())
}

/// 未指定单位时按存量数值推断；只换单位时容量不变，`--value` 按最终单位解释。
async fn update(
    console: &Console,
    args: ObjectUpdateArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let existing = console
        .resources()
        .object(args.id)
        .await
        .map_err(ConsoleError::Load)?;
    let mut form = PowerObjectForm::from_object(&existing);
    if let Some(unit) = args.unit {
        form = form.with_unit(unit);
    }
    if let Some(value) = args.value {
        form.value = value;
    }
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(object_type) = args.object_type {
        form.object_type = object_type;
    }
    if let Some(description) = args.description {
        form.description = description;
    }
    let request = form.validate()?;
    writeln!(out, "{}", form.preview())?;
    console
        .resources()
        .update_object(args.id, &request)
        .await
        .map_err(ConsoleError::request(UPDATE_OBJECT_FAILED))?;
    writeln!(out, "Объект обновлён")?;
    Ok(())
}

async fn delete(console: &Console, args: DeleteArgs, out: &mut dyn Write) -> Result<(), ConsoleError> {
    console
        .resources()
        .delete_object(args.id)
        .await
        .map_err(ConsoleError::request(GENERIC_ERROR))?;
    writeln!(out, "Объект удалён")?;
    Ok(())
}
