use clap::{Args, Subcommand};
use stockroom_app::{
    context::AppContext,
    domain::customers::{data::NewCustomer, records::CustomerUuid},
};

#[derive(Debug, Args)]
pub(crate) struct CustomerCommand {
    #[command(subcommand)]
    command: CustomerSubcommand,
}

#[derive(Debug, Subcommand)]
enum CustomerSubcommand {
    /// Register a customer
    Add(AddCustomerArgs),

    /// List customers by name
    List,
}

#[derive(Debug, Args)]
struct AddCustomerArgs {
    /// Customer name
    #[arg(long)]
    name: String,

    /// Customer email address
    #[arg(long, default_value = "")]
    email: String,

    /// Optional customer UUID; generated when omitted
    #[arg(long)]
    uuid: Option<CustomerUuid>,
}

pub(crate) async fn run(command: CustomerCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        CustomerSubcommand::Add(args) => {
            let customer = ctx
                .customers
                .create_customer(NewCustomer {
                    uuid: args.uuid.unwrap_or_default(),
                    name: args.name,
                    email: args.email,
                })
                .await
                .map_err(|error| format!("failed to create customer: {error}"))?;

            println!("customer_uuid: {}", customer.uuid);
            println!("name: {}", customer.name);
        }
        CustomerSubcommand::List => {
            let customers = ctx
                .customers
                .list_customers()
                .await
                .map_err(|error| format!("failed to list customers: {error}"))?;

            if customers.is_empty() {
                println!("no customers found");
            }

            for customer in customers {
                println!("{}  {}  {}", customer.uuid, customer.name, customer.email);
            }
        }
    }

    Ok(())
}
