mod emphasis;
mod links;
