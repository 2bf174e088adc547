// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod create_view;
mod describe;
mod drop_view;
mod information_schema;
mod show_tables;
