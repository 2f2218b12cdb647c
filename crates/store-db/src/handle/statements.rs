//! SQL text prepared on every handle, one statement per family and operation

use store_core::{Family, Operation};

struct FamilySql {
    add: &'static str,
    get_by_id: &'static str,
    get_by_name: &'static str,
    list: &'static str,
    modify: &'static str,
    remove: &'static str,
}

const USERS: FamilySql = FamilySql {
    add: r"
        INSERT INTO users (name, email, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
    ",
    get_by_id: r"
        SELECT id, name, email, role, created_at, updated_at
        FROM users WHERE id = $1
    ",
    get_by_name: r"
        SELECT id, name, email, role, created_at, updated_at
        FROM users WHERE name = $1
    ",
    list: r"
        SELECT id, name, email, role, created_at, updated_at
        FROM users ORDER BY id
    ",
    modify: r"
        UPDATE users SET name = $2, email = $3, role = $4, updated_at = $5
        WHERE id = $1
    ",
    remove: "DELETE FROM users WHERE id = $1",
};

const PRODUCTS: FamilySql = FamilySql {
    add: r"
        INSERT INTO products (name, description, price_cents, stock, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
    ",
    get_by_id: r"
        SELECT id, name, description, price_cents, stock, created_at, updated_at
        FROM products WHERE id = $1
    ",
    get_by_name: r"
        SELECT id, name, description, price_cents, stock, created_at, updated_at
        FROM products WHERE name = $1
    ",
    list: r"
        SELECT id, name, description, price_cents, stock, created_at, updated_at
        FROM products ORDER BY id
    ",
    modify: r"
        UPDATE products
        SET name = $2, description = $3, price_cents = $4, stock = $5, updated_at = $6
        WHERE id = $1
    ",
    remove: "DELETE FROM products WHERE id = $1",
};

const SALES: FamilySql = FamilySql {
    add: r"
        INSERT INTO sales (name, user_id, product_id, quantity, total_cents, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
    ",
    get_by_id: r"
        SELECT id, name, user_id, product_id, quantity, total_cents, created_at, updated_at
        FROM sales WHERE id = $1
    ",
    get_by_name: r"
        SELECT id, name, user_id, product_id, quantity, total_cents, created_at, updated_at
        FROM sales WHERE name = $1
    ",
    list: r"
        SELECT id, name, user_id, product_id, quantity, total_cents, created_at, updated_at
        FROM sales ORDER BY id
    ",
    modify: r"
        UPDATE sales
        SET name = $2, user_id = $3, product_id = $4, quantity = $5, total_cents = $6,
            updated_at = $7
        WHERE id = $1
    ",
    remove: "DELETE FROM sales WHERE id = $1",
};

const DISCOUNTS: FamilySql = FamilySql {
    add: r"
        INSERT INTO discounts (name, product_id, percent, active, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
    ",
    get_by_id: r"
        SELECT id, name, product_id, percent, active, created_at, updated_at
        FROM discounts WHERE id = $1
    ",
    get_by_name: r"
        SELECT id, name, product_id, percent, active, created_at, updated_at
        FROM discounts WHERE name = $1
    ",
    list: r"
        SELECT id, name, product_id, percent, active, created_at, updated_at
        FROM discounts ORDER BY id
    ",
    modify: r"
        UPDATE discounts
        SET name = $2, product_id = $3, percent = $4, active = $5, updated_at = $6
        WHERE id = $1
    ",
    remove: "DELETE FROM discounts WHERE id = $1",
};

const REFUNDS: FamilySql = FamilySql {
    add: r"
        INSERT INTO refunds (name, sale_id, amount_cents, reason, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
    ",
    get_by_id: r"
        SELECT id, name, sale_id, amount_cents, reason, created_at, updated_at
        FROM refunds WHERE id = $1
    ",
    get_by_name: r"
        SELECT id, name, sale_id, amount_cents, reason, created_at, updated_at
        FROM refunds WHERE name = $1
    ",
    list: r"
        SELECT id, name, sale_id, amount_cents, reason, created_at, updated_at
        FROM refunds ORDER BY id
    ",
    modify: r"
        UPDATE refunds
        SET name = $2, sale_id = $3, amount_cents = $4, reason = $5, updated_at = $6
        WHERE id = $1
    ",
    remove: "DELETE FROM refunds WHERE id = $1",
};

const INFORMS: FamilySql = FamilySql {
    add: r"
        INSERT INTO informs (name, body, created_at, updated_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id
    ",
    get_by_id: "SELECT id, name, body, created_at, updated_at FROM informs WHERE id = $1",
    get_by_name: "SELECT id, name, body, created_at, updated_at FROM informs WHERE name = $1",
    list: "SELECT id, name, body, created_at, updated_at FROM informs ORDER BY id",
    modify: "UPDATE informs SET name = $2, body = $3, updated_at = $4 WHERE id = $1",
    remove: "DELETE FROM informs WHERE id = $1",
};

/// SQL prepared for `operation` on handles of `family`
pub fn statement_sql(family: Family, operation: Operation) -> &'static str {
    let sql = match family {
        Family::Users => &USERS,
        Family::Sales => &SALES,
        Family::Refunds => &REFUNDS,
        Family::Products => &PRODUCTS,
        Family::Discounts => &DISCOUNTS,
        Family::Informs => &INFORMS,
    };

    match operation {
        Operation::Add => sql.add,
        Operation::GetById => sql.get_by_id,
        Operation::GetByName => sql.get_by_name,
        Operation::List => sql.list,
        Operation::Modify => sql.modify,
        Operation::Remove => sql.remove,
    }
}
