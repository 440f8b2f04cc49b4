//! Shopping list display formatting

use crate::i18n::Translator;
use crate::models::ShoppingItem;
use crate::services::shopping::ShoppingList;

use super::table;

fn item_table(items: &[ShoppingItem], t: &Translator) -> String {
    let header = [t.t("item_name"), t.t("quantity"), t.t("category"), t.t("id")];
    let rows = items.iter().map(|item| {
        vec![
            item.name.clone(),
            item.quantity.to_string(),
            item.category.clone(),
            item.id.to_string(),
        ]
    });
    table(&header, rows)
}

/// Format the list as active items followed by purchased items
pub fn format_shopping_list(list: &ShoppingList, t: &Translator) -> String {
    if list.is_empty() {
        return format!("{}\n", t.t("no_items"));
    }

    let mut output = String::new();
    if !list.active.is_empty() {
        output.push_str(&format!("{} ({})\n", t.t("to_buy"), list.active.len()));
        output.push_str(&item_table(&list.active, t));
        output.push('\n');
    }
    if !list.purchased.is_empty() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{} ({})\n", t.t("purchased_items"), list.purchased.len()));
        output.push_str(&item_table(&list.purchased, t));
        output.push('\n');
    }
    output
}
