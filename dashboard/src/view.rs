use crate::{models::UserRow, session::Mode};

pub const ADD_SUCCESS: &str = "User added successfully!";
pub const ADD_FAILURE: &str = "Failed to add user";
pub const UPDATE_SUCCESS: &str = "User updated!";
pub const UPDATE_FAILURE: &str = "Update failed";
pub const DELETE_SUCCESS: &str = "User deleted!";
pub const DELETE_FAILURE: &str = "Delete failed";
pub const NO_USERS: &str = "No users found.";

pub fn render_user_list(rows: &[UserRow]) -> String {
    let mut out = String::from("== User List ==\n");
    if rows.is_empty() {
        out.push_str(NO_USERS);
        out.push('\n');
        return out;
    }

    for (index, row) in rows.iter().enumerate() {
        out.push_str(&format!("[{}] {} ({})\n", index + 1, row.name, row.email));
        out.push_str(&format!("    Name:  {}\n", row.name));
        out.push_str(&format!("    Email: {}\n", row.email));
    }
    out
}

pub fn render_add_view() -> String {
    "== Add New User ==\nType `new` to fill in the form.\n".to_string()
}

pub fn help(mode: Mode) -> &'static str {
    match mode {
        Mode::View => {
            "commands: update <n>, delete <n>, reload, mode add, quit\n"
        }
        Mode::Add => "commands: new, mode view, quit\n",
    }
}

pub fn prompt(mode: Mode) -> &'static str {
    match mode {
        Mode::View => "[view] > ",
        Mode::Add => "[add] > ",
    }
}
