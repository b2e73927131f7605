use crate::cli::{
    DeleteArgs, OrganizationArgs, OrganizationUpdateArgs, OrganizationsCommand, SearchArgs,
};
use crate::console::Console;
use crate::error::ConsoleError;
use crate::messages::{
    CREATE_ORGANIZATION_FAILED, GENERIC_ERROR, NO_DATA, UPDATE_ORGANIZATION_FAILED,
};
use crate::render::{optional, table};
use std::io::Write;
use tc_filter::search_organizations;
use tc_forms::OrganizationForm;

const ORGANIZATIONS_PATH: &str = "/admin/organizations";

pub async fn run(
    command: OrganizationsCommand,
    console: &mut Console,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    console.enter(ORGANIZATIONS_PATH)?;
    match command {
        OrganizationsCommand::List(args) => list(console, args, out).await,
        OrganizationsCommand::Create(args) => create(console, args, out).await,
        OrganizationsCommand::Update(args) => update(console, args, out).await,
        OrganizationsCommand::Delete(args) => delete(console, args, out).await,
    }
}

async fn list(console: &Console, args: SearchArgs, out: &mut dyn Write) -> Result<(), ConsoleError> {
    let organizations = console
        .resources()
        .organizations()
        .await
        .map_err(ConsoleError::Load)?;
    let found = search_organizations(&organizations, &args.search);
    if found.is_empty() {
        writeln!(out, "{NO_DATA}")?;
        return Ok(());
    }
    let headers = ["ID", "Название", "БИН", "Адрес", "Контактное лицо", "Телефон"];
    let rows = found.iter().map(|org| {
        vec![
            org.id.to_string(),
            org.name.clone(),
            optional(org.bin.as_deref()),
            optional(org.address.as_deref()),
            optional(org.contact_person.as_deref()),
            optional(org.contact_phone.as_deref()),
        ]
    });
    writeln!(out, "{}", table(&headers, rows))?;
    Ok(())
}

async fn create(
    console: &Console,
    args: OrganizationArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let form = OrganizationForm {
        name: args.name,
        bin: args.bin.unwrap_or_default(),
        address: args.address.unwrap_or_default(),
        contact_person: args.contact_person.unwrap_or_default(),
        contact_phone: args.contact_phone.unwrap_or_default(),
    };
    let request = form.validate()?;
    let organization = console
        .resources()
        .create_organization(&request)
        .await
        .map_err(ConsoleError::request(CREATE_ORGANIZATION_FAILED))?;
    writeln!(out, "Организация создана (ID {})", organization.id)?;
    Ok(())
}

async fn update(
    console: &Console,
    args: OrganizationUpdateArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let existing = console
        .resources()
        .organization(args.id)
        .await
        .map_err(ConsoleError::Load)?;
    let mut form = OrganizationForm::from_organization(&existing);
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(bin) = args.bin {
        form.bin = bin;
    }
    if let Some(address) = args.address {
        form.address = address;
    }
    if let Some(contact_person) = args.contact_person {
        form.contact_person = contact_person;
    }
    if let Some(contact_phone) = args.contact_phone {
        form.contact_phone = contact_phone;
    }
    let request = form.validate()?;
    console
        .resources()
        .update_organization(args.id, &request)
        .await
        .map_err(ConsoleError::request(UPDATE_ORGANIZATION_FAILED))?;
    writeln!(out, "Организация обновлена")?;
    Ok(())
}

async fn delete(console: &Console, args: DeleteArgs, out: &mut dyn Write) -> Result<(), ConsoleError> {
    console
        .resources()
        .delete_organization(args.id)
        .await
        .map_err(ConsoleError::request(GENERIC_ERROR))?;
    writeln!(out, "Организация удалена")?;
    Ok(())
}
