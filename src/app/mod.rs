// App layer: presentation of the search view for the command line.

pub mod terminal;
