pub(crate) mod add_torrents;
pub(crate) mod overlays;
pub(crate) mod overview;
pub(crate) mod shell;
pub(crate) mod transition;
