use clap::Args;
use stockroom::form::ProductFields;

/// Product field flags shared by `create` and `update`.
#[derive(Debug, Default, Args)]
pub(crate) struct FieldArgs {
    /// Product name
    #[arg(long)]
    name: Option<String>,

    /// Category label
    #[arg(long)]
    category: Option<String>,

    /// Free-text description, up to 255 characters
    #[arg(long)]
    description: Option<String>,

    /// Unit price, at least 0.01
    #[arg(long)]
    price: Option<String>,

    /// Units in stock
    #[arg(long, allow_hyphen_values = true)]
    stock_quantity: Option<String>,

    /// Digits-only barcode
    #[arg(long)]
    barcode: Option<String>,

    /// Mark the product as active
    #[arg(long, conflicts_with = "inactive")]
    active: bool,

    /// Mark the product as inactive
    #[arg(long)]
    inactive: bool,

    /// Show the product as on sale
    #[arg(long, conflicts_with = "not_on_sale")]
    on_sale: bool,

    /// Stop showing the product as on sale
    #[arg(long)]
    not_on_sale: bool,
}

impl FieldArgs {
    /// Overwrites the fields that were given on the command line.
    pub(crate) fn apply(self, fields: &mut ProductFields) {
        let texts = [
            (self.name, &mut fields.name),
            (self.category, &mut fields.category),
            (self.description, &mut fields.description),
            (self.price, &mut fields.price),
            (self.stock_quantity, &mut fields.stock_quantity),
            (self.barcode, &mut fields.barcode),
        ];

        for (value, slot) in texts {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if self.active {
            fields.active = true;
        } else if self.inactive {
            fields.active = false;
        }

        if self.on_sale {
            fields.on_sale = true;
        } else if self.not_on_sale {
            fields.on_sale = false;
        }
    }
}
