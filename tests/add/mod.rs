mod adding_a_non_existent_file_is_skipped;
mod adding_outside_a_repository_fails;
mod adding_the_same_name_twice_keeps_latest;
