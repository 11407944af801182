//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with title, product count and status
//! - `ProductImage`: Framed placeholder naming the product image
//! - `PriceDisplay`: Right-aligned price label
//! - `ProductDepartment`: Department breadcrumb
//! - `ProductRow`: One product, composed of the three above
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ProductList`: The catalog view; keeps a cursor and scroll offset in
//!   `ProductListState` and emits `ProductListEvent::Clicked`
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", never by reaching into
//! global state. `ProductList` gets the `SelectionController` by shared
//! reference and only *asks* it `is_selected`; selecting goes back up
//! through an event.
//!
//! ```text
//! components/
//! ├── mod.rs                (this file)
//! ├── title_bar.rs          (Top status bar)
//! ├── product_list.rs       (Catalog view, cursor, hit testing)
//! ├── product_row.rs        (Single product)
//! ├── product_image.rs      (Image placeholder)
//! ├── price_display.rs      (Price label)
//! └── product_department.rs (Breadcrumb)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod price_display;
pub mod product_department;
pub mod product_image;
pub mod product_list;
pub mod product_row;
pub use product_list::{ProductList, ProductListEvent, ProductListState};
