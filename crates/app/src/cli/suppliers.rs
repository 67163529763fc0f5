use clap::{Args, Subcommand};
use stockroom_app::{
    context::AppContext,
    domain::suppliers::{data::NewSupplier, records::SupplierUuid},
};

#[derive(Debug, Args)]
pub(crate) struct SupplierCommand {
    #[command(subcommand)]
    command: SupplierSubcommand,
}

#[derive(Debug, Subcommand)]
enum SupplierSubcommand {
    /// Register a supplier
    Add(AddSupplierArgs),

    /// List suppliers by name
    List,
}

#[derive(Debug, Args)]
struct AddSupplierArgs {
    /// Supplier name
    #[arg(long)]
    name: String,

    /// Contact details
    #[arg(long, default_value = "")]
    contact: String,
}

pub(crate) async fn run(command: SupplierCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        SupplierSubcommand::Add(args) => {
            let supplier = ctx
                .suppliers
                .create_supplier(NewSupplier {
                    uuid: SupplierUuid::new(),
                    name: args.name,
                    contact: args.contact,
                })
                .await
                .map_err(|error| format!("failed to create supplier: {error}"))?;

            println!("supplier_uuid: {}", supplier.uuid);
            println!("name: {}", supplier.name);
        }
        SupplierSubcommand::List => {
            let suppliers = ctx
                .suppliers
                .list_suppliers()
                .await
                .map_err(|error| format!("failed to list suppliers: {error}"))?;

            if suppliers.is_empty() {
                println!("no suppliers found");
            }

            for supplier in suppliers {
                println!("{}  {}  {}", supplier.uuid, supplier.name, supplier.contact);
            }
        }
    }

    Ok(())
}
