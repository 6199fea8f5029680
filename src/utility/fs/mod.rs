// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! copy:  ensure_parent_dir()  create_dir_all on the parent
//!        copy_file_async()    stream src --> dst (overwrite), returns bytes
//!        path_exists()        existence check, errors read as "absent"
//! ```

pub mod copy;
