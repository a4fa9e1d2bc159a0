mod code;
mod headings;
mod list;
mod quote_rule;
mod table;
