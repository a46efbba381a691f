// src/services/help.rs

/// Usage text printed whenever a parse ends in help mode
pub const HELP_TEXT: &str = r#"
Syntax: androiddeploy --output <destination> [options]

Prepares an Android package in the build directory <destination> and
builds it into an .apk or .aab file.

Optional arguments:
    --input <inputfile>: Read deployment settings from <inputfile>. When
       omitted, android-<current directory name>-deployment-settings.json
       is used.

    --deployment <mechanism>: One of
       bundled (default): ship the runtime libraries inside the package.
       unbundled: assume the runtime libraries are already on the device.

    --aab: Build an Android App Bundle. Overrides --no-build.

    --no-build: Skip building, e.g. to install a package built earlier.

    --install: Install the package on the device, uninstalling any
       previous installation first.

    --reinstall: Install the package on the device, keeping the data of
       any previous installation.

    --device <device ID>: Deploy to this device instead of the adb default.

    --android-platform <platform>: Build against this Android platform
       instead of the highest one available.

    --release: Build a release package. Without it the package is signed
       with a debug key.

    --sign [<keystore> <alias>]: Sign the package with the given keystore
       and alias. When both are omitted they are read from
       QT_ANDROID_KEYSTORE_PATH and QT_ANDROID_KEYSTORE_ALIAS. Missing
       passwords are read from QT_ANDROID_KEYSTORE_STORE_PASS and
       QT_ANDROID_KEYSTORE_KEY_PASS.
       Options used with signing:
         --storepass <password>: Keystore password.
         --storetype <type>: Keystore type.
         --keypass <password>: Private key password, if it differs from
           the keystore password.
         --sigfile <file>: Name of the .SF/.DSA file.
         --digestalg <name>: Digest algorithm. Default is "SHA-256".
         --sigalg <name>: Signature algorithm. Default is "SHA256withRSA".
         --tsa <url>: Time Stamping Authority location.
         --tsacert <alias>: Public key certificate of the TSA.
         --internalsf: Put the .SF file inside the signature block.
         --sectionsonly: Do not hash the whole manifest.
         --protected: The keystore has a protected authentication path.

    --jdk <path/to/jdk>: JDK used to find the signing tools.

    --apk <path>: Copy the built apk to this location.

    --depfile <path>: Write a dependency file. Requires --builddir.

    --builddir <path>: Build directory that depfile entries are relative to.

    --qml-importscanner-binary <path>: Use this qmlimportscanner binary
       instead of the one from the settings file.

    --aux-mode: Only copy dependencies and update templates. Nothing is
       built or installed.

    --no-rcc-bundle-cleanup: Keep the rcc bundle directory afterwards.

    --copy-dependencies-only: Stop after the dependencies have been copied.

    --verbose: Print information while processing.

    --help: Display this information.

Setting ANDROIDDEPLOYQT_TIMING_OUTPUT prints how long argument processing
took.
"#;
