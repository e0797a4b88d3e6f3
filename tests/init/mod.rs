mod init_twice_reports_existing_repository;
